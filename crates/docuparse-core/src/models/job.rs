//! Job models

use serde::{Deserialize, Serialize};

/// Response for the async processing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAccepted {
    /// Identifier assigned to the accepted job, prefixed `job_`
    pub job_id: String,
    /// Human-readable acceptance message
    pub message: String,
    /// Relative URL to poll for job status
    pub status_url: String,
}

/// Response for `GET /api/v1/jobs/{job_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    /// Identifier the status was requested for, echoed back
    pub job_id: String,
    /// Current job status
    pub status: String,
}
