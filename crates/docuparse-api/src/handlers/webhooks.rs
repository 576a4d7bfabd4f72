//! Webhook handlers
//!
//! Configuration payloads are accepted and discarded; callback payloads are
//! logged. No delivery, retry, or signature verification exists.

use axum::Json;
use axum_extra::extract::WithRejection;
use docuparse_core::{CallbackResponse, WebhookConfigureResponse};

use crate::error::ApiError;

/// POST /api/v1/webhooks/configure
/// Accept a webhook configuration
pub async fn configure_webhook(
    WithRejection(Json(config), _): WithRejection<Json<serde_json::Value>, ApiError>,
) -> Json<WebhookConfigureResponse> {
    tracing::info!(config = %config, "Webhook configuration received");

    Json(WebhookConfigureResponse {
        message: "Webhook configuration placeholder".to_string(),
    })
}

/// POST /api/v1/webhooks/callback
/// Receive a webhook event
pub async fn webhook_callback(
    WithRejection(Json(payload), _): WithRejection<Json<serde_json::Value>, ApiError>,
) -> Json<CallbackResponse> {
    tracing::info!(payload = %payload, "Webhook callback received");

    Json(CallbackResponse {
        status: "received".to_string(),
    })
}
