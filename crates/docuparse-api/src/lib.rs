//! docuparse-api - DocuParse REST API layer
//!
//! This crate provides the HTTP surface of the DocuParse backend. Every
//! processing endpoint returns placeholder data; only the upload endpoint
//! performs real work by saving the posted document to disk.
//!
//! # Usage
//!
//! ```ignore
//! use docuparse_api::{create_router, AppState};
//!
//! let state = AppState::new();
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::{Json, Router};
use docuparse_core::ServiceStatus;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the DocuParse REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service banner, checked by the demo frontend
        .route("/", get(service_status))
        // Upload route
        .route("/api/v1/upload", post(handlers::upload::upload_document))
        // Parse routes
        .route("/api/v1/parse", post(handlers::parse::parse_document))
        .route(
            "/api/v1/parse_async",
            post(handlers::parse::parse_document_async),
        )
        // Extract routes
        .route("/api/v1/extract", post(handlers::extract::extract_document))
        .route(
            "/api/v1/extract_async",
            post(handlers::extract::extract_document_async),
        )
        // Split routes
        .route("/api/v1/split", post(handlers::split::split_document))
        .route(
            "/api/v1/split_async",
            post(handlers::split::split_document_async),
        )
        // Webhook routes
        .route(
            "/api/v1/webhooks/configure",
            post(handlers::webhooks::configure_webhook),
        )
        .route(
            "/api/v1/webhooks/callback",
            post(handlers::webhooks::webhook_callback),
        )
        // Job status route
        .route("/api/v1/jobs/{job_id}", get(handlers::jobs::get_job_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET /
/// Service banner
async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: "DocuParse Backend is running".to_string(),
    })
}
