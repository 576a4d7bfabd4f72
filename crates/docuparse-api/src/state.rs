//! Application state for the DocuParse API

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Upload directory used when neither `UPLOAD_DIR` nor a config value is set
pub const DEFAULT_UPLOAD_DIR: &str = "/app/uploads";

/// Environment variable overriding the upload directory
pub const UPLOAD_DIR_ENV: &str = "UPLOAD_DIR";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upload directory used when the environment variable is not set
    fallback_upload_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new AppState with the default upload directory
    pub fn new() -> Self {
        Self::with_upload_dir(PathBuf::from(DEFAULT_UPLOAD_DIR))
    }

    /// Create a new AppState with a specific fallback upload directory
    pub fn with_upload_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            fallback_upload_dir: Arc::new(dir.into()),
        }
    }

    /// Resolve the upload directory
    ///
    /// `UPLOAD_DIR` is consulted on every call, not captured at startup.
    pub fn upload_dir(&self) -> PathBuf {
        env::var(UPLOAD_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| self.fallback_upload_dir.as_ref().clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
