//! ClearDesk CLI — upload files to the ClearDesk media API.
//!
//! Set CLEARDESK_API_URL (defaults to http://localhost:3000) and optionally
//! CLEARDESK_API_TOKEN for bearer auth.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use cleardesk_cli::{init_tracing, ConsoleObserver};
use cleardesk_client::{ApiClient, BatchOptions, UploadOptions};
use cleardesk_core::constants::{DEFAULT_CATEGORY, DEFAULT_CONCURRENCY, DEFAULT_FOLDER};
use cleardesk_core::format_file_size;
use cleardesk_core::models::{content_type_for_extension, FileHandle, MediaCategory};
use cleardesk_core::preview::PreviewUrlBuilder;
use cleardesk_core::validation::UploadConstraints;

#[derive(Parser)]
#[command(name = "cleardesk", about = "ClearDesk upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one or more files
    Upload {
        /// Paths of the files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Category tag stored alongside the files
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Destination folder on the media store
        #[arg(long, default_value = DEFAULT_FOLDER)]
        folder: String,
        /// Skip server-side optimization
        #[arg(long)]
        no_optimize: bool,
        /// Maximum number of in-flight transfers
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
        /// Reject files larger than this many bytes
        #[arg(long)]
        max_size: Option<u64>,
        /// Allowed MIME type (repeatable); unrestricted when omitted
        #[arg(long = "allow-type")]
        allow_types: Vec<String>,
        /// Allowed filename extension (repeatable); unrestricted when omitted
        #[arg(long = "allow-ext")]
        allow_exts: Vec<String>,
    },
    /// Build a preview URL for a stored media URL
    Preview {
        /// Stored media URL
        url: String,
        /// Target width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Target height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Crop mode (e.g. fill, fit, scale)
        #[arg(long)]
        crop: Option<String>,
        /// Quality (e.g. auto, 80)
        #[arg(long)]
        quality: Option<String>,
        /// Output format (e.g. auto, webp)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show the category and formatted size of a local file
    Inspect {
        /// Path of the file to inspect
        file: PathBuf,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            files,
            category,
            folder,
            no_optimize,
            concurrency,
            max_size,
            allow_types,
            allow_exts,
        } => {
            let client = ApiClient::from_env().context(
                "Failed to create API client. Set CLEARDESK_API_URL and optionally CLEARDESK_API_TOKEN",
            )?;

            let mut handles = Vec::with_capacity(files.len());
            for path in &files {
                let handle = FileHandle::from_path(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                handles.push(handle);
            }

            let options = BatchOptions {
                upload: UploadOptions {
                    category,
                    folder,
                    optimize: !no_optimize,
                    constraints: UploadConstraints {
                        max_size_bytes: max_size,
                        allowed_content_types: allow_types,
                        allowed_extensions: allow_exts,
                    },
                    ..Default::default()
                },
                concurrency,
            };

            let result = client
                .upload_batch(&handles, &options, Arc::new(ConsoleObserver::default()))
                .await;
            print_json(&result)?;

            if result.failed() > 0 {
                std::process::exit(1);
            }
        }
        Commands::Preview {
            url,
            width,
            height,
            crop,
            quality,
            format,
        } => {
            let mut builder = PreviewUrlBuilder::new();
            if let Some(width) = width {
                builder = builder.width(width);
            }
            if let Some(height) = height {
                builder = builder.height(height);
            }
            if let Some(ref crop) = crop {
                builder = builder.crop(crop);
            }
            if let Some(ref quality) = quality {
                builder = builder.quality(quality);
            }
            if let Some(ref format) = format {
                builder = builder.format(format);
            }
            print_json(&serde_json::json!({ "preview_url": builder.build(&url) }))?;
        }
        Commands::Inspect { file } => {
            let metadata = std::fs::metadata(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let content_type = file
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| content_type_for_extension(&e.to_ascii_lowercase()))
                .unwrap_or("application/octet-stream");
            print_json(&serde_json::json!({
                "file": file.file_name().and_then(|n| n.to_str()).unwrap_or_default(),
                "content_type": content_type,
                "category": MediaCategory::from_content_type(content_type).as_str(),
                "size_bytes": metadata.len(),
                "size": format_file_size(metadata.len()),
            }))?;
        }
    }

    Ok(())
}
