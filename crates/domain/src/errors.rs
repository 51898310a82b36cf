use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid resolver endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid DoH request: {0}")]
    InvalidRequest(String),

    #[error("Transport failure contacting {endpoint}: {reason}")]
    TransportFailure { endpoint: String, reason: String },

    #[error("Upstream {endpoint} rejected the query with HTTP {status}")]
    UpstreamRejection { endpoint: String, status: u16 },

    #[error("All {attempts} upstream attempts failed")]
    AllUpstreamsFailed { attempts: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Per-attempt failures that make an upstream eligible for fan-out.
    pub fn is_attempt_failure(&self) -> bool {
        matches!(
            self,
            DomainError::TransportFailure { .. } | DomainError::UpstreamRejection { .. }
        )
    }
}
