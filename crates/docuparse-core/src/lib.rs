//! docuparse-core - Core types for the DocuParse document processing API
//!
//! This crate holds the JSON wire contract shared by the server
//! (`docuparse-api`) and the client (`docuparse-client`). It contains no
//! behavior beyond serialization.

pub mod models;

pub use models::*;
