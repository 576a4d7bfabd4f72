//! DocuParse Client Library
//!
//! Provides a typed HTTP client for the DocuParse document processing API.
//!
//! # Example
//!
//! ```rust,no_run
//! use docuparse_client::DocuParseClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DocuParseClient::new("http://localhost:8000")?;
//!
//!     // Upload a document
//!     let upload = client.upload_file("report.pdf").await?;
//!     println!("stored as {}", upload.file_id);
//!
//!     // Parse a document by URL
//!     let parsed = client.parse("https://example.com/report.pdf").await?;
//!     println!("{} pages", parsed.usage.num_pages);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-process harness for integration
//! tests. With the `test-support` feature it serves the full API:
//!
//! ```rust,ignore
//! use docuparse_client::testing::TestServer;
//!
//! let upload_dir = tempfile::TempDir::new()?;
//! let server = TestServer::start_with_upload_dir(upload_dir.path()).await?;
//! let status = server.client.status().await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::DocuParseClient;
pub use error::{DocuParseClientError, Result};

// Re-export wire models for convenience
pub use docuparse_core::models::*;
