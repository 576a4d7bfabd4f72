//! Extract models

use serde::{Deserialize, Serialize};

use crate::models::parse::Usage;

/// Request body for `POST /api/v1/extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// URL of the document to extract from
    pub document_url: String,
    /// JSON schema describing the fields to extract
    pub schema: serde_json::Value,
    /// Extraction options, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<serde_json::Value>,
}

/// Request body for `POST /api/v1/extract_async`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractAsyncRequest {
    /// URL of the document to extract from
    pub document_url: String,
    /// JSON schema describing the fields to extract
    pub schema: serde_json::Value,
    /// Extraction options, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<serde_json::Value>,
    /// Webhook configuration for result delivery, accepted as-is
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub webhook: Option<serde_json::Value>,
}

/// Response for synchronous extract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Extracted fields shaped by the requested schema
    pub result: serde_json::Value,
    pub usage: Usage,
}
