//! Parse handlers
//!
//! The sync endpoint accepts either a JSON body with a document URL or a
//! multipart form carrying the document itself; both produce the same
//! placeholder result. No parsing is performed.

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::Json;
use axum_extra::extract::WithRejection;
use docuparse_core::{
    JobAccepted, ParseAsyncRequest, ParseRequest, ParseResponse, ParseResult, ParsedFigure,
    ParsedPage, ParsedTable, Usage,
};

use crate::error::ApiError;
use crate::state::AppState;

use super::jobs;

/// POST /api/v1/parse
/// Parse a document synchronously
pub async fn parse_document(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ParseResponse>, ApiError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &state)
            .await
            .map_err(ApiError::from)?;

        let mut file_received = false;
        let mut mode = None;
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("file") => {
                    let data = field.bytes().await?;
                    tracing::debug!(size = data.len(), "Received document in multipart parse");
                    file_received = true;
                }
                Some("mode") => {
                    mode = Some(field.text().await?);
                }
                _ => {}
            }
        }

        if !file_received {
            return Err(ApiError::validation("file", "Field required"));
        }

        // The mode is accepted but does not change the placeholder output
        tracing::info!(
            mode = %mode.as_deref().unwrap_or("standard"),
            "Parse requested (multipart)"
        );
    } else {
        let Json(body) = Json::<ParseRequest>::from_request(request, &state)
            .await
            .map_err(ApiError::from)?;

        tracing::info!(document_url = %body.document_url, "Parse requested");
    }

    Ok(Json(placeholder_parse_response()))
}

/// POST /api/v1/parse_async
/// Accept a parse job
pub async fn parse_document_async(
    WithRejection(Json(request), _): WithRejection<Json<ParseAsyncRequest>, ApiError>,
) -> Result<(StatusCode, Json<JobAccepted>), ApiError> {
    let job_id = jobs::placeholder_job_id(&request)?;

    if request.webhook.is_some() {
        tracing::debug!(job_id = %job_id, "Webhook delivery requested for parse job");
    }

    tracing::info!(
        document_url = %request.document_url,
        job_id = %job_id,
        "Parse job accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(jobs::job_accepted(job_id, "Parse job accepted")),
    ))
}

fn placeholder_parse_response() -> ParseResponse {
    ParseResponse {
        result: ParseResult {
            pages: vec![
                ParsedPage {
                    page_number: 1,
                    content: "Sample page content extracted from the document.".to_string(),
                },
                ParsedPage {
                    page_number: 2,
                    content: "Second page of sample content.".to_string(),
                },
            ],
            tables: vec![ParsedTable {
                table_id: "table_0".to_string(),
                page_number: 1,
                cells: vec![
                    vec!["Item".to_string(), "Qty".to_string()],
                    vec!["Widget".to_string(), "2".to_string()],
                ],
            }],
            figures: vec![ParsedFigure {
                figure_id: "figure_0".to_string(),
                page_number: 2,
                caption: "Sample figure".to_string(),
            }],
        },
        usage: Usage { num_pages: 2 },
    }
}
