use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    pub message: String,
    pub ip: String,
    pub timestamp: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationFailure {
    pub message: String,
    pub error: String,
    pub status: String,
}
