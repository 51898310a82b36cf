use async_trait::async_trait;
use ferrous_doh_domain::DomainError;

/// Port for discovering the public IP outbound requests leave from.
#[async_trait]
pub trait IpEchoPort: Send + Sync {
    async fn public_ip(&self) -> Result<String, DomainError>;
}
