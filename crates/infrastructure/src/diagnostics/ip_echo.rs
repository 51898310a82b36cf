use async_trait::async_trait;
use ferrous_doh_application::ports::IpEchoPort;
use ferrous_doh_domain::DomainError;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DIAGNOSTIC_USER_AGENT: &str = "DoH-Test/1.0";

#[derive(Debug, Deserialize)]
struct IpEchoBody {
    origin: String,
}

/// Asks an httpbin-style service which address our requests leave from.
pub struct HttpIpEchoClient {
    client: reqwest::Client,
    url: String,
}

impl HttpIpEchoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::ConfigError(format!("Failed to build diagnostics HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn failure(&self, reason: impl ToString) -> DomainError {
        DomainError::TransportFailure {
            endpoint: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl IpEchoPort for HttpIpEchoClient {
    async fn public_ip(&self) -> Result<String, DomainError> {
        let body: IpEchoBody = self
            .client
            .get(&self.url)
            .header(USER_AGENT, DIAGNOSTIC_USER_AGENT)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.failure(e))?
            .json()
            .await
            .map_err(|e| self.failure(e))?;

        debug!(url = %self.url, ip = %body.origin, "IP echo answered");
        Ok(body.origin)
    }
}
