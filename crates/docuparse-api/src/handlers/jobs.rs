//! Job status handler and job id derivation
//!
//! There is no job store. Async submissions derive a stable id from the
//! request body, and the status endpoint answers every id with the same
//! placeholder status.

use axum::extract::Path;
use axum::Json;
use docuparse_core::{JobAccepted, JobStatus};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ApiError;

/// Status string reported for every job id
pub const PLACEHOLDER_JOB_STATUS: &str = "Placeholder Status";

/// Derive a deterministic job id from a request body
///
/// The id is `job_` followed by the first 8 bytes of the SHA-256 digest of
/// the request's JSON encoding, hex-encoded. Identical submissions receive
/// identical ids.
pub(crate) fn placeholder_job_id<T: Serialize>(request: &T) -> Result<String, ApiError> {
    let encoded = serde_json::to_vec(request)
        .map_err(|e| ApiError::Internal(format!("Failed to encode request: {}", e)))?;

    let digest = Sha256::digest(&encoded);
    Ok(format!("job_{}", hex::encode(&digest[..8])))
}

/// Build the acceptance response for an async submission
pub(crate) fn job_accepted(job_id: String, message: &str) -> JobAccepted {
    let status_url = format!("/api/v1/jobs/{}", job_id);
    JobAccepted {
        job_id,
        message: message.to_string(),
        status_url,
    }
}

/// GET /api/v1/jobs/{job_id}
/// Report the status of a job
///
/// Unknown ids are not rejected; every id gets the placeholder status.
pub async fn get_job_status(Path(job_id): Path<String>) -> Json<JobStatus> {
    tracing::debug!(job_id = %job_id, "Job status requested");

    Json(JobStatus {
        job_id,
        status: PLACEHOLDER_JOB_STATUS.to_string(),
    })
}
