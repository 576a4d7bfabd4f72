//! Shared data models for the DocuParse API

mod error;
mod extract;
mod job;
mod parse;
mod service;
mod split;
mod upload;
mod webhook;

pub use error::*;
pub use extract::*;
pub use job::*;
pub use parse::*;
pub use service::*;
pub use split::*;
pub use upload::*;
pub use webhook::*;
