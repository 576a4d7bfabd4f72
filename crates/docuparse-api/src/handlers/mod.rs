//! HTTP request handlers for the DocuParse API
//!
//! Every processing handler returns a fixed placeholder payload; only the
//! upload handler touches the filesystem.

pub mod extract;
pub mod jobs;
pub mod parse;
pub mod split;
pub mod upload;
pub mod webhooks;
