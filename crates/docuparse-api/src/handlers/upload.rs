//! Document upload handler
//!
//! The uploaded document is written to the upload directory under a fresh
//! `file_` id that keeps the original extension. Nothing reads the file
//! back; the id is only returned to the caller.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use docuparse_core::UploadResponse;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/upload
/// Store an uploaded document
pub async fn upload_document(
    State(state): State<AppState>,
    WithRejection(mut multipart, _): WithRejection<Multipart, ApiError>,
) -> Result<Json<UploadResponse>, ApiError> {
    // Pull out the `file` part; unrelated parts are skipped
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::BadRequest("No filename provided".to_string()))?;

        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await?;
        upload = Some((original_filename, content_type, data));
        break;
    }

    let (original_filename, content_type, data) =
        upload.ok_or_else(|| ApiError::validation("file", "Field required"))?;

    let file_id = format!("file_{}", Uuid::new_v4().simple());
    let stored_name = match Path::new(&original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{}.{}", file_id, ext),
        None => file_id.clone(),
    };

    let upload_dir = state.upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to create upload directory: {}", e)))?;

    let dest = upload_dir.join(&stored_name);
    if let Err(e) = tokio::fs::write(&dest, &data).await {
        // The failed write may have left a partial file behind
        let _ = tokio::fs::remove_file(&dest).await;
        return Err(ApiError::Internal(format!("Failed to store upload: {}", e)));
    }

    tracing::info!(
        file_id = %file_id,
        original_filename = %original_filename,
        content_type = %content_type,
        size = data.len(),
        path = %dest.display(),
        "File uploaded"
    );

    Ok(Json(UploadResponse {
        file_id,
        original_filename,
        content_type,
    }))
}
