//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
