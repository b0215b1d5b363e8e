use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One entry of the supported criteria listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionInfo {
    pub name: String,
    pub filters: bool,
    pub scores: bool,
}
