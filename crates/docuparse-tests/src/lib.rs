//! Integration tests for the DocuParse backend
//!
//! This crate contains end-to-end tests that exercise the full stack:
//! - HTTP API layer (router, extractors, error mapping)
//! - Upload storage
//! - Client library
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p docuparse-tests
//! ```
//!
//! Tests that change the `UPLOAD_DIR` environment variable are marked
//! `#[serial]` so they never observe each other's directories.
//!
//! # Test Structure
//!
//! - `api_properties.rs` - The observable guarantees of the API surface:
//!   upload storage, validation failures, async job acceptance, job status

// This crate only contains tests, no library code
