//! Upload models

use serde::{Deserialize, Serialize};

/// Response for a stored upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-assigned file identifier, prefixed `file_`
    pub file_id: String,
    /// Filename exactly as sent by the client
    pub original_filename: String,
    /// MIME type as declared by the client
    pub content_type: String,
}
