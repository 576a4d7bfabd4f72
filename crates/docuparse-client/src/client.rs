//! DocuParse HTTP client implementation

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use docuparse_core::models::*;

use crate::error::{DocuParseClientError, Result};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Guess a MIME type from a filename extension.
///
/// The server stores whatever content type the upload declares, so this
/// only needs to cover the document formats the API is typically fed.
fn guess_content_type(filename: &str) -> &'static str {
    match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// DocuParse REST API client
///
/// Provides methods to communicate with a DocuParse server.
#[derive(Debug, Clone)]
pub struct DocuParseClient {
    client: Client,
    base_url: Url,
}

impl DocuParseClient {
    /// Create a new DocuParse client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the DocuParse server (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new DocuParse client with custom configuration
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    ///
    /// Useful for making custom requests while reusing the client's
    /// connection pool.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Service Status
    // =========================================================================

    /// Check that the service is up
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<ServiceStatus> {
        let url = self.base_url.join("/")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Upload Operations
    // =========================================================================

    /// Upload a document from an in-memory buffer
    #[instrument(skip(self, data))]
    pub async fn upload_bytes(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<UploadResponse> {
        let url = self.base_url.join("/api/v1/upload")?;
        debug!("Uploading {} bytes to {}", data.len(), url);

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Upload a document from disk
    ///
    /// The filename sent to the server is the path's final component and
    /// the content type is guessed from its extension.
    #[instrument(skip(self, path))]
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<UploadResponse> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DocuParseClientError::ParseError(format!("Invalid file path: {}", path.display()))
            })?
            .to_string();

        let data = tokio::fs::read(path).await?;
        let content_type = guess_content_type(&filename);

        self.upload_bytes(&filename, content_type, data).await
    }

    // =========================================================================
    // Parse Operations
    // =========================================================================

    /// Parse a document synchronously by URL
    #[instrument(skip(self))]
    pub async fn parse(&self, document_url: &str) -> Result<ParseResponse> {
        let url = self.base_url.join("/api/v1/parse")?;
        let request = ParseRequest {
            document_url: document_url.to_string(),
            options: None,
        };

        let response = self.client.post(url).json(&request).send().await?;
        self.handle_response(response).await
    }

    /// Parse a document posted directly as multipart
    ///
    /// `mode` selects the parsing mode. It is forwarded as a form field;
    /// when `None` the server default applies.
    #[instrument(skip(self, data))]
    pub async fn parse_upload(
        &self,
        filename: &str,
        data: Vec<u8>,
        mode: Option<&str>,
    ) -> Result<ParseResponse> {
        let url = self.base_url.join("/api/v1/parse")?;

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(guess_content_type(filename))?;
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(mode) = mode {
            form = form.text("mode", mode.to_string());
        }

        let response = self.client.post(url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Submit a parse job
    #[instrument(skip(self, request))]
    pub async fn parse_async(&self, request: &ParseAsyncRequest) -> Result<JobAccepted> {
        let url = self.base_url.join("/api/v1/parse_async")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Extract Operations
    // =========================================================================

    /// Extract structured fields synchronously
    #[instrument(skip(self, request))]
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse> {
        let url = self.base_url.join("/api/v1/extract")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    /// Submit an extract job
    #[instrument(skip(self, request))]
    pub async fn extract_async(&self, request: &ExtractAsyncRequest) -> Result<JobAccepted> {
        let url = self.base_url.join("/api/v1/extract_async")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Split Operations
    // =========================================================================

    /// Split a document into named sections synchronously
    #[instrument(skip(self, request))]
    pub async fn split(&self, request: &SplitRequest) -> Result<SplitResponse> {
        let url = self.base_url.join("/api/v1/split")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    /// Submit a split job
    #[instrument(skip(self, request))]
    pub async fn split_async(&self, request: &SplitAsyncRequest) -> Result<JobAccepted> {
        let url = self.base_url.join("/api/v1/split_async")?;
        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Job Operations
    // =========================================================================

    /// Get the status of a job
    #[instrument(skip(self))]
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        let url = self.base_url.join(&format!("/api/v1/jobs/{}", job_id))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Webhook Operations
    // =========================================================================

    /// Register a webhook configuration
    #[instrument(skip(self, config))]
    pub async fn configure_webhook(
        &self,
        config: &serde_json::Value,
    ) -> Result<WebhookConfigureResponse> {
        let url = self.base_url.join("/api/v1/webhooks/configure")?;
        let response = self.client.post(url).json(config).send().await?;
        self.handle_response(response).await
    }

    /// Deliver an event to the callback endpoint
    #[instrument(skip(self, payload))]
    pub async fn send_callback(&self, payload: &serde_json::Value) -> Result<CallbackResponse> {
        let url = self.base_url.join("/api/v1/webhooks/callback")?;
        let response = self.client.post(url).json(payload).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Handle response and deserialize JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| DocuParseClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> DocuParseClientError {
        // Try to parse error response body
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => format!("HTTP {}", status),
        };

        match status {
            StatusCode::BAD_REQUEST => DocuParseClientError::InvalidRequest(message),
            StatusCode::UNPROCESSABLE_ENTITY => DocuParseClientError::ValidationRejected(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                DocuParseClientError::Timeout
            }
            _ => DocuParseClientError::server_error(status.as_u16(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DocuParseClient::new("http://localhost:8000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = DocuParseClient::new("not a url");
        assert!(client.is_err());
    }

    #[test]
    fn test_base_url_is_kept() {
        let client = DocuParseClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("report.pdf"), "application/pdf");
        assert_eq!(guess_content_type("notes.txt"), "text/plain");
        assert_eq!(guess_content_type("page.HTML"), "application/octet-stream");
        assert_eq!(guess_content_type("README"), "application/octet-stream");
    }
}
