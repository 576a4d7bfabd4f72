//! Extract handlers

use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use docuparse_core::{ExtractAsyncRequest, ExtractRequest, ExtractResponse, JobAccepted, Usage};
use serde_json::json;

use crate::error::ApiError;

use super::jobs;

/// POST /api/v1/extract
/// Extract structured fields synchronously
///
/// The requested schema is accepted but the placeholder result has a fixed
/// shape.
pub async fn extract_document(
    WithRejection(Json(request), _): WithRejection<Json<ExtractRequest>, ApiError>,
) -> Json<ExtractResponse> {
    tracing::info!(document_url = %request.document_url, "Extract requested");

    Json(placeholder_extract_response())
}

/// POST /api/v1/extract_async
/// Accept an extract job
pub async fn extract_document_async(
    WithRejection(Json(request), _): WithRejection<Json<ExtractAsyncRequest>, ApiError>,
) -> Result<(StatusCode, Json<JobAccepted>), ApiError> {
    let job_id = jobs::placeholder_job_id(&request)?;

    if request.webhook.is_some() {
        tracing::debug!(job_id = %job_id, "Webhook delivery requested for extract job");
    }

    tracing::info!(
        document_url = %request.document_url,
        job_id = %job_id,
        "Extract job accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(jobs::job_accepted(job_id, "Extract job accepted")),
    ))
}

fn placeholder_extract_response() -> ExtractResponse {
    ExtractResponse {
        result: json!({
            "title": "Sample Document",
            "author": "Jane Doe",
            "summary": "A short placeholder summary of the document contents.",
        }),
        usage: Usage { num_pages: 2 },
    }
}
