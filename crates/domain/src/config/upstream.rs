use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Default resolver pool, in round-robin and fan-out order.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Whole-request timeout of the outbound HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_secs: default_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec![
        "https://cloudflare-dns.com/dns-query".to_string(),
        "https://dns.google/dns-query".to_string(),
        "https://1.1.1.1/dns-query".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_pool_max_idle_per_host() -> usize {
    4
}
