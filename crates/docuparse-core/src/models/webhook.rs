//! Webhook models

use serde::{Deserialize, Serialize};

/// Response for `POST /api/v1/webhooks/configure`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfigureResponse {
    /// Acknowledgement message
    pub message: String,
}

/// Response for `POST /api/v1/webhooks/callback`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackResponse {
    /// Receipt status, always `received`
    pub status: String,
}
