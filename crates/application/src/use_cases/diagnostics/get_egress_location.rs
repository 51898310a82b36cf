use crate::ports::IpEchoPort;
use ferrous_doh_domain::DomainError;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EgressLocation {
    pub ip: String,
    pub latency_ms: u64,
}

pub struct GetEgressLocationUseCase {
    ip_echo: Arc<dyn IpEchoPort>,
}

impl GetEgressLocationUseCase {
    pub fn new(ip_echo: Arc<dyn IpEchoPort>) -> Self {
        Self { ip_echo }
    }

    pub async fn execute(&self) -> Result<EgressLocation, DomainError> {
        let start = Instant::now();
        let ip = self.ip_echo.public_ip().await?;
        Ok(EgressLocation {
            ip,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
