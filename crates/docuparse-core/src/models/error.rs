//! Error response models

use serde::{Deserialize, Serialize};

/// Standard error response body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error category (e.g., "bad_request")
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Per-field validation details, present on 422 responses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<Vec<ValidationDetail>>,
}

/// A single request-validation failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// The request field the failure refers to
    pub field: String,
    /// What was wrong with it
    pub message: String,
}
