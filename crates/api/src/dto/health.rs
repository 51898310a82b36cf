use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    /// Size of the default resolver pool.
    pub servers: usize,
    pub rules: usize,
    /// Unix time in milliseconds.
    pub timestamp: i64,
}
