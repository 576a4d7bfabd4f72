//! docuparsed - DocuParse Server Daemon
//!
//! REST API backend for document upload, parsing, extraction and splitting.
//!
//! Usage:
//!   docuparsed [config.toml]
//!
//! If no config file is provided, the server binds 0.0.0.0:8000 and stores
//! uploads under /app/uploads (overridable via the UPLOAD_DIR environment
//! variable, which is consulted per request).

use std::net::{IpAddr, SocketAddr};

use docuparse_api::{create_router, state, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args { config_path: None };

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            a if !a.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(a.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"docuparsed - DocuParse Server Daemon

Usage: docuparsed [OPTIONS] [config.toml]

Options:
  -h, --help  Print this help message

Environment:
  PORT        Override the listening port
  UPLOAD_DIR  Override the upload directory (read per request)

Examples:
  # Run with defaults (0.0.0.0:8000)
  docuparsed

  # Run with a config file
  docuparsed config.toml
"#
    );
}

/// Server settings resolved from the config file, environment, and defaults
struct ServerConfig {
    host: String,
    port: u16,
    upload_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            upload_dir: state::DEFAULT_UPLOAD_DIR.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docuparsed=info,docuparse_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docuparsed (DocuParse Server Daemon)");

    // Parse command-line arguments
    let args = parse_args();

    let mut config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        let content = std::fs::read_to_string(path)?;
        parse_config(&content)?
    } else {
        tracing::info!("No config file provided, using defaults");
        ServerConfig::default()
    };

    // PORT takes precedence over the config file
    if let Ok(port) = std::env::var("PORT") {
        config.port = port
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid PORT value: {}", port))?;
    }

    tracing::info!(upload_dir = %config.upload_dir, "Upload directory configured");

    // Create the app state and router
    let app_state = AppState::with_upload_dir(&config.upload_dir);
    let app = create_router(app_state);

    // Bind to address
    let host: IpAddr = config
        .host
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid host address: {}", config.host))?;
    let addr = SocketAddr::from((host, config.port));
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse server settings from TOML config content
///
/// Recognized keys, all optional:
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8000
/// upload_dir = "/app/uploads"
/// ```
fn parse_config(content: &str) -> anyhow::Result<ServerConfig> {
    let config: toml::Value = toml::from_str(content)?;
    let defaults = ServerConfig::default();

    let server = config.get("server");

    let host = server
        .and_then(|s| s.get("host"))
        .and_then(|h| h.as_str())
        .unwrap_or(&defaults.host)
        .to_string();

    let port = match server.and_then(|s| s.get("port")) {
        Some(value) => {
            let raw = value
                .as_integer()
                .ok_or_else(|| anyhow::anyhow!("Port must be an integer, got: {}", value))?;
            u16::try_from(raw).map_err(|_| anyhow::anyhow!("Port out of range: {}", raw))?
        }
        None => defaults.port,
    };

    let upload_dir = server
        .and_then(|s| s.get("upload_dir"))
        .and_then(|u| u.as_str())
        .unwrap_or(&defaults.upload_dir)
        .to_string();

    Ok(ServerConfig {
        host,
        port,
        upload_dir,
    })
}
