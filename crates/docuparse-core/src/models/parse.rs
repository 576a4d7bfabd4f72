//! Parse models

use serde::{Deserialize, Serialize};

/// Request body for the JSON variant of `POST /api/v1/parse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// URL of the document to parse (http(s), local path, or `jobid://`)
    pub document_url: String,
    /// Parse options, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<serde_json::Value>,
}

/// Request body for `POST /api/v1/parse_async`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseAsyncRequest {
    /// URL of the document to parse
    pub document_url: String,
    /// Parse options, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<serde_json::Value>,
    /// Webhook configuration for result delivery, accepted as-is
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub webhook: Option<serde_json::Value>,
}

/// Parsed content of a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Page text in reading order
    pub pages: Vec<ParsedPage>,
    /// Tables detected across all pages
    pub tables: Vec<ParsedTable>,
    /// Figures detected across all pages
    pub figures: Vec<ParsedFigure>,
}

/// A single parsed page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedPage {
    /// 1-based page number
    pub page_number: u32,
    /// Extracted text content
    pub content: String,
}

/// A table found in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Identifier unique within the parse result
    pub table_id: String,
    /// Page the table was found on
    pub page_number: u32,
    /// Row-major cell contents
    pub cells: Vec<Vec<String>>,
}

/// A figure found in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFigure {
    /// Identifier unique within the parse result
    pub figure_id: String,
    /// Page the figure was found on
    pub page_number: u32,
    /// Caption text, empty if none was detected
    pub caption: String,
}

/// Page accounting attached to processing responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Number of pages the request was billed for
    pub num_pages: u32,
}

/// Response for synchronous parse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub result: ParseResult,
    pub usage: Usage,
}
