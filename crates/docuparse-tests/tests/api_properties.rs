//! Observable guarantees of the DocuParse API surface
//!
//! These tests exercise the running server over plain HTTP (raw reqwest)
//! where status codes and error bodies matter, and through the typed client
//! where they do not. Covered:
//!
//! 1. Uploading content C yields a `file_` id and a byte-identical file at
//!    the derived storage path.
//! 2. An upload request without the `file` field yields 422 with a detail
//!    entry naming `file`.
//! 3. Every async endpoint returns 202 with a non-empty, deterministic
//!    job id.
//! 4. The jobs endpoint answers any id with 200 and the literal status.
//! 5. `UPLOAD_DIR` is consulted per request, not at startup.

use docuparse_client::testing::TestServer;
use docuparse_core::{ErrorResponse, ParseAsyncRequest, UploadResponse};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use serial_test::serial;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

async fn start_server() -> (TestServer, TempDir) {
    let upload_dir = TempDir::new().expect("Failed to create upload dir");
    let server = TestServer::start_with_upload_dir(upload_dir.path())
        .await
        .expect("Failed to start test server");

    (server, upload_dir)
}

fn http() -> reqwest::Client {
    reqwest::Client::new()
}

fn upload_form(content: &[u8]) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(content.to_vec())
        .file_name("sample.pdf")
        .mime_str("application/pdf")
        .unwrap();
    reqwest::multipart::Form::new().part("file", part)
}

/// The job id the server derives for a request body: `job_` plus the first
/// 8 bytes of the SHA-256 digest of its JSON encoding, hex-encoded.
fn expected_job_id<T: serde::Serialize>(request: &T) -> String {
    let digest = Sha256::digest(serde_json::to_vec(request).unwrap());
    format!("job_{}", hex::encode(&digest[..8]))
}

// =============================================================================
// Upload Properties
// =============================================================================

#[tokio::test]
#[serial]
async fn upload_stores_byte_identical_content_under_file_id() {
    let (server, upload_dir) = start_server().await;

    let content = b"%PDF-1.4 contents that must survive the round trip";
    let response = http()
        .post(format!("{}/api/v1/upload", server.base_url()))
        .multipart(upload_form(content))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: UploadResponse = response.json().await.unwrap();
    assert!(body.file_id.starts_with("file_"));
    assert_eq!(body.original_filename, "sample.pdf");

    let stored = upload_dir.path().join(format!("{}.pdf", body.file_id));
    assert_eq!(std::fs::read(&stored).unwrap(), content);
}

#[tokio::test]
async fn upload_without_file_field_is_422_naming_the_field() {
    let (server, _upload_dir) = start_server().await;

    let form = reqwest::multipart::Form::new().text("unrelated", "data");
    let response = http()
        .post(format!("{}/api/v1/upload", server.base_url()))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = response.json().await.unwrap();
    let detail = body.detail.expect("422 must carry detail entries");
    assert!(detail.iter().any(|d| d.field == "file"));
}

#[tokio::test]
async fn upload_file_part_without_filename_is_400() {
    let (server, _upload_dir) = start_server().await;

    // A `file` part that carries bytes but no filename
    let part = reqwest::multipart::Part::bytes(b"orphan bytes".to_vec());
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = http()
        .post(format!("{}/api/v1/upload", server.base_url()))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "bad_request");
}

// =============================================================================
// Request Validation Properties
// =============================================================================

#[tokio::test]
async fn malformed_json_body_is_422() {
    let (server, _upload_dir) = start_server().await;

    let response = http()
        .post(format!("{}/api/v1/parse_async", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn json_body_missing_required_field_is_422() {
    let (server, _upload_dir) = start_server().await;

    // split requires document_url and split_description
    let response = http()
        .post(format!("{}/api/v1/split", server.base_url()))
        .json(&json!({"split_rules": "by chapter"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "validation_error");
}

// =============================================================================
// Async Job Properties
// =============================================================================

#[tokio::test]
async fn every_async_endpoint_returns_202_with_a_job_id() {
    let (server, _upload_dir) = start_server().await;

    let bodies = [
        (
            "/api/v1/parse_async",
            json!({"document_url": "https://example.com/a.pdf"}),
        ),
        (
            "/api/v1/extract_async",
            json!({
                "document_url": "https://example.com/a.pdf",
                "schema": {"title": "string"},
            }),
        ),
        (
            "/api/v1/split_async",
            json!({
                "document_url": "https://example.com/a.pdf",
                "split_description": [
                    {"name": "intro", "description": "Opening pages"},
                ],
            }),
        ),
    ];

    for (path, body) in bodies {
        let response = http()
            .post(format!("{}{}", server.base_url(), path))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED, "{}", path);
        let accepted: Value = response.json().await.unwrap();
        let job_id = accepted["job_id"].as_str().unwrap();
        assert!(!job_id.is_empty(), "{}", path);
        assert!(job_id.starts_with("job_"), "{}", path);
    }
}

#[tokio::test]
async fn job_id_is_the_digest_of_the_request_body() {
    let (server, _upload_dir) = start_server().await;
    let client = &server.client;

    let request = ParseAsyncRequest {
        document_url: "https://example.com/digest.pdf".to_string(),
        options: None,
        webhook: None,
    };

    let accepted = client.parse_async(&request).await.unwrap();
    assert_eq!(accepted.job_id, expected_job_id(&request));

    // Same body, same id; different body, different id
    let again = client.parse_async(&request).await.unwrap();
    assert_eq!(again.job_id, accepted.job_id);

    let other = ParseAsyncRequest {
        document_url: "https://example.com/other.pdf".to_string(),
        options: None,
        webhook: None,
    };
    let other_accepted = client.parse_async(&other).await.unwrap();
    assert_ne!(other_accepted.job_id, accepted.job_id);
}

// =============================================================================
// Job Status Properties
// =============================================================================

#[tokio::test]
async fn jobs_endpoint_answers_any_id_with_200() {
    let (server, _upload_dir) = start_server().await;

    for id in ["job_0011223344556677", "made-up", "42"] {
        let response = http()
            .get(format!("{}/api/v1/jobs/{}", server.base_url(), id))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", id);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["job_id"], id);
        assert_eq!(body["status"], "Placeholder Status");
    }
}

// =============================================================================
// Upload Directory Properties
// =============================================================================

#[tokio::test]
#[serial]
async fn upload_dir_env_is_read_per_request() {
    let (server, fallback_dir) = start_server().await;
    let client = &server.client;

    // With the variable unset, uploads land in the fallback directory
    std::env::remove_var("UPLOAD_DIR");
    let first = client
        .upload_bytes("a.txt", "text/plain", b"first".to_vec())
        .await
        .unwrap();
    assert!(fallback_dir
        .path()
        .join(format!("{}.txt", first.file_id))
        .is_file());

    // Pointing the variable elsewhere redirects the next upload
    let override_dir = TempDir::new().unwrap();
    std::env::set_var("UPLOAD_DIR", override_dir.path());
    let second = client
        .upload_bytes("b.txt", "text/plain", b"second".to_vec())
        .await
        .unwrap();
    std::env::remove_var("UPLOAD_DIR");

    assert!(override_dir
        .path()
        .join(format!("{}.txt", second.file_id))
        .is_file());
    assert!(!fallback_dir
        .path()
        .join(format!("{}.txt", second.file_id))
        .exists());
}

// =============================================================================
// Banner Properties
// =============================================================================

#[tokio::test]
async fn root_route_reports_the_service_banner() {
    let (server, _upload_dir) = start_server().await;

    let response = http().get(server.base_url()).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "DocuParse Backend is running");
}
