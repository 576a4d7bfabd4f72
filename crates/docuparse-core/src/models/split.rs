//! Split models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::parse::Usage;

/// A named section the caller wants the document divided into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSection {
    /// Section name used as the key in the result mapping
    pub name: String,
    /// Natural-language description of what belongs in the section
    pub description: String,
}

/// Request body for `POST /api/v1/split`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// URL of the document to split
    pub document_url: String,
    /// Sections to divide the document into
    pub split_description: Vec<SplitSection>,
    /// Free-form splitting rules, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub split_rules: Option<String>,
}

/// Request body for `POST /api/v1/split_async`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitAsyncRequest {
    /// URL of the document to split
    pub document_url: String,
    /// Sections to divide the document into
    pub split_description: Vec<SplitSection>,
    /// Free-form splitting rules, accepted as-is and not applied
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub split_rules: Option<String>,
    /// Webhook configuration for result delivery, accepted as-is
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub webhook: Option<serde_json::Value>,
}

/// Section-to-pages assignment produced by a split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    /// Maps each section name to the 1-based pages assigned to it
    pub section_mapping: BTreeMap<String, Vec<u32>>,
}

/// Response for synchronous split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResponse {
    pub result: SplitResult,
    pub usage: Usage,
}
