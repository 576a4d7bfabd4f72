//! DocuParse CLI - Demo frontend for the DocuParse backend
//!
//! Talks to a running docuparsed instance over HTTP: checks the service
//! banner, uploads documents, and triggers the parse/extract/split
//! endpoints in their sync and async variants.

mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docuparse_client::{
    DocuParseClient, ExtractAsyncRequest, ExtractRequest, ParseAsyncRequest, SplitAsyncRequest,
    SplitRequest, SplitSection,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::output::OutputContext;

#[derive(Parser)]
#[command(name = "docuparse-cli")]
#[command(author, version, about = "DocuParse document processing CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Server URL
    #[arg(
        short,
        long,
        env = "DOCUPARSE_SERVER",
        default_value = "http://localhost:8000"
    )]
    server: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Status,

    /// Upload a document
    Upload {
        /// Path to the document
        file: PathBuf,
    },

    /// Parse a document
    Parse {
        /// URL of the document to parse
        #[arg(required_unless_present = "file")]
        document_url: Option<String>,

        /// Post a local file instead of a URL (sync only)
        #[arg(long, conflicts_with = "async_mode")]
        file: Option<PathBuf>,

        /// Parsing mode sent alongside a posted file
        #[arg(long, requires = "file")]
        mode: Option<String>,

        /// Submit as an async job instead of waiting for the result
        #[arg(long)]
        async_mode: bool,

        /// Webhook URL for async result delivery
        #[arg(long, requires = "async_mode")]
        webhook: Option<String>,
    },

    /// Extract structured fields from a document
    Extract {
        /// URL of the document to extract from
        document_url: String,

        /// Extraction schema: a path to a JSON file or inline JSON
        #[arg(long)]
        schema: String,

        /// Submit as an async job instead of waiting for the result
        #[arg(long)]
        async_mode: bool,
    },

    /// Split a document into named sections
    Split {
        /// URL of the document to split
        document_url: String,

        /// Section as "name:description" (repeatable)
        #[arg(long = "section", required = true)]
        sections: Vec<String>,

        /// Free-form splitting rules
        #[arg(long)]
        rules: Option<String>,

        /// Submit as an async job instead of waiting for the result
        #[arg(long)]
        async_mode: bool,
    },

    /// Poll the status of a job
    Job {
        /// Job identifier returned by an async endpoint
        job_id: String,
    },

    /// Register a webhook configuration
    ConfigureWebhook {
        /// Configuration: a path to a JSON file or inline JSON
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let ctx = OutputContext::new(cli.no_color, cli.quiet);
    let client = create_client(&cli.server)?;

    // Execute command
    match &cli.command {
        Commands::Status => {
            let status = client.status().await?;
            ctx.success(&status.message);
        }

        Commands::Upload { file } => {
            let response = client.upload_file(file).await?;
            ctx.success(&format!("Uploaded {}", file.display()));
            ctx.print_json(&response);
        }

        Commands::Parse {
            document_url,
            file,
            mode,
            async_mode,
            webhook,
        } => {
            if let Some(path) = file {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .with_context(|| format!("Invalid file path: {}", path.display()))?;
                let data = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;

                let response = client
                    .parse_upload(filename, data, mode.as_deref())
                    .await?;
                ctx.print_json(&response);
            } else if *async_mode {
                let request = ParseAsyncRequest {
                    document_url: document_url.clone().unwrap_or_default(),
                    options: None,
                    webhook: webhook
                        .as_ref()
                        .map(|url| serde_json::json!({ "url": url })),
                };
                let accepted = client.parse_async(&request).await?;
                ctx.success(&format!("Job accepted: {}", accepted.job_id));
                ctx.print_json(&accepted);
            } else {
                let url = document_url.clone().unwrap_or_default();
                let response = client.parse(&url).await?;
                ctx.print_json(&response);
            }
        }

        Commands::Extract {
            document_url,
            schema,
            async_mode,
        } => {
            let schema = load_json_arg(schema)?;

            if *async_mode {
                let request = ExtractAsyncRequest {
                    document_url: document_url.clone(),
                    schema,
                    options: None,
                    webhook: None,
                };
                let accepted = client.extract_async(&request).await?;
                ctx.success(&format!("Job accepted: {}", accepted.job_id));
                ctx.print_json(&accepted);
            } else {
                let request = ExtractRequest {
                    document_url: document_url.clone(),
                    schema,
                    options: None,
                };
                let response = client.extract(&request).await?;
                ctx.print_json(&response);
            }
        }

        Commands::Split {
            document_url,
            sections,
            rules,
            async_mode,
        } => {
            let split_description = sections
                .iter()
                .map(|s| parse_section(s))
                .collect::<Result<Vec<_>>>()?;

            if *async_mode {
                let request = SplitAsyncRequest {
                    document_url: document_url.clone(),
                    split_description,
                    split_rules: rules.clone(),
                    webhook: None,
                };
                let accepted = client.split_async(&request).await?;
                ctx.success(&format!("Job accepted: {}", accepted.job_id));
                ctx.print_json(&accepted);
            } else {
                let request = SplitRequest {
                    document_url: document_url.clone(),
                    split_description,
                    split_rules: rules.clone(),
                };
                let response = client.split(&request).await?;
                ctx.print_json(&response);
            }
        }

        Commands::Job { job_id } => {
            let status = client.job_status(job_id).await?;
            ctx.print_kv(&[
                ("Job", status.job_id.clone()),
                ("Status", status.status.clone()),
            ]);
        }

        Commands::ConfigureWebhook { config } => {
            let response = client.configure_webhook(&load_json_arg(config)?).await?;
            ctx.success(&response.message);
        }
    }

    Ok(())
}

/// Create a DocuParse client for the given server URL
fn create_client(server: &str) -> Result<DocuParseClient> {
    DocuParseClient::new(server).context("Failed to create DocuParse client")
}

/// Interpret an argument as a JSON file path or as inline JSON
fn load_json_arg(arg: &str) -> Result<serde_json::Value> {
    let path = Path::new(arg);
    let content = if path.is_file() {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        arg.to_string()
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid JSON: {}", arg))
}

/// Parse a "name:description" section argument
fn parse_section(arg: &str) -> Result<SplitSection> {
    let (name, description) = arg
        .split_once(':')
        .with_context(|| format!("Section must be \"name:description\", got \"{}\"", arg))?;

    Ok(SplitSection {
        name: name.to_string(),
        description: description.to_string(),
    })
}
