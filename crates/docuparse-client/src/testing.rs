//! In-process test harness for DocuParse integration tests
//!
//! [`TestServer`] serves a router on an ephemeral local port and hands back
//! a [`DocuParseClient`] already pointed at it. With the `test-support`
//! feature enabled it can also stand up the full DocuParse API wired to a
//! caller-chosen upload directory, which is what every integration suite in
//! the workspace uses.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::{DocuParseClient, Result};

/// Harness client timeouts; everything talks to localhost, so a request
/// slower than this is a hang.
const HARNESS_TIMEOUT: Duration = Duration::from_secs(5);
const HARNESS_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// A server under test, shut down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: DocuParseClient,
    shutdown: Option<oneshot::Sender<()>>,
    serve_task: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serve the given router on an ephemeral local port
    ///
    /// The listener is bound before this returns, so the client may be used
    /// immediately; connections made before the serve task is scheduled
    /// queue on the listener backlog.
    pub async fn start(router: axum::Router) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown, shutdown_rx) = oneshot::channel();
        let serve_task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let client = DocuParseClient::with_config(
            &format!("http://{}", addr),
            HARNESS_TIMEOUT,
            HARNESS_CONNECT_TIMEOUT,
        )?;

        Ok(Self {
            addr,
            client,
            shutdown: Some(shutdown),
            serve_task: Some(serve_task),
        })
    }

    /// Serve the full DocuParse API with uploads routed to `upload_dir`
    ///
    /// The directory is installed as the server's fallback; the
    /// `UPLOAD_DIR` environment variable still takes precedence per
    /// request, exactly as in production.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let upload_dir = tempfile::TempDir::new()?;
    /// let server = TestServer::start_with_upload_dir(upload_dir.path()).await?;
    ///
    /// let status = server.client.status().await?;
    /// ```
    #[cfg(feature = "test-support")]
    pub async fn start_with_upload_dir(upload_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        let state = docuparse_api::AppState::with_upload_dir(upload_dir);
        Self::start(docuparse_api::create_router(state)).await
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &DocuParseClient {
        &self.client
    }

    /// Shutdown the server gracefully and wait for it to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.serve_task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Tests that never call shutdown() must not leak the serve task
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.serve_task.take() {
            task.abort();
        }
    }
}
