// CLI entry point for the batch image compressor. The lib.rs file serves
// as the public API for external consumers.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use image_compressor::utils::format_size;
use image_compressor::{
    download_all, load_source_image, CompressionSettings, CompressorSession, SourceImage,
    DEFAULT_QUALITY, MAX_EDGE,
};

/// Compress images: downscale to a maximum edge length and re-encode.
#[derive(Debug, Parser)]
#[command(name = "image-compressor", version)]
struct Args {
    /// Image files to compress
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory for the compressed artifacts
    #[arg(short, long, default_value = "compressed")]
    output: PathBuf,

    /// Encode quality (1-100), applied to lossy formats
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Maximum edge length in pixels
    #[arg(long, default_value_t = MAX_EDGE, value_parser = clap::value_parser!(u32).range(1..))]
    max_edge: u32,

    /// Print the result list as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .compact();

    subscriber.init();

    let args = Args::parse();

    // Unreadable paths are skipped here; an input surface only hands over
    // files it could open.
    let mut files: Vec<SourceImage> = Vec::with_capacity(args.files.len());
    for path in &args.files {
        match load_source_image(path).await {
            Ok(source) => files.push(source),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let settings = CompressionSettings {
        quality: args.quality,
        max_edge: args.max_edge,
    };

    let mut session = CompressorSession::new(settings);
    let results = session
        .compress_batch_with_progress(files, |progress| {
            info!(
                "Compressing... {}% ({}/{})",
                progress.percentage(),
                progress.attempted,
                progress.total
            );
        })
        .await?;

    let paths = download_all(results, &args.output).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for (result, path) in results.iter().zip(&paths) {
            info!(
                "{}: {} -> {} ({}% smaller) at {}",
                result.name,
                format_size(result.original_size),
                format_size(result.encoded_size),
                result.ratio,
                path.display()
            );
        }
    }

    Ok(())
}
