//! Service-level models

use serde::{Deserialize, Serialize};

/// Liveness banner returned by `GET /`
///
/// The demo frontend checks this route before enabling the rest of its UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Human-readable liveness message
    pub message: String,
}
