//! Split handlers

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use docuparse_core::{
    JobAccepted, SplitAsyncRequest, SplitRequest, SplitResponse, SplitResult, Usage,
};

use crate::error::ApiError;

use super::jobs;

/// POST /api/v1/split
/// Split a document into named sections
///
/// The requested sections are accepted but the placeholder mapping has a
/// fixed shape.
pub async fn split_document(
    WithRejection(Json(request), _): WithRejection<Json<SplitRequest>, ApiError>,
) -> Json<SplitResponse> {
    tracing::info!(
        document_url = %request.document_url,
        sections = request.split_description.len(),
        "Split requested"
    );

    Json(placeholder_split_response())
}

/// POST /api/v1/split_async
/// Accept a split job
pub async fn split_document_async(
    WithRejection(Json(request), _): WithRejection<Json<SplitAsyncRequest>, ApiError>,
) -> Result<(StatusCode, Json<JobAccepted>), ApiError> {
    let job_id = jobs::placeholder_job_id(&request)?;

    if request.webhook.is_some() {
        tracing::debug!(job_id = %job_id, "Webhook delivery requested for split job");
    }

    tracing::info!(
        document_url = %request.document_url,
        job_id = %job_id,
        "Split job accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(jobs::job_accepted(job_id, "Split job accepted")),
    ))
}

fn placeholder_split_response() -> SplitResponse {
    let mut section_mapping = BTreeMap::new();
    section_mapping.insert("introduction".to_string(), vec![1]);
    section_mapping.insert("body".to_string(), vec![2, 3]);
    section_mapping.insert("appendix".to_string(), vec![4]);

    SplitResponse {
        result: SplitResult { section_mapping },
        usage: Usage { num_pages: 4 },
    }
}
