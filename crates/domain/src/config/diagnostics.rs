use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// JSON service that reports the caller's public IP in an `origin` field.
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            ip_echo_url: default_ip_echo_url(),
        }
    }
}

fn default_ip_echo_url() -> String {
    "https://httpbin.org/ip".to_string()
}
