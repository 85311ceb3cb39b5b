// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod download;

// Public exports for external consumers
pub use crate::core::{
    BatchProgress, BatchSummary, CompressionResult, CompressionSettings, CompressorSession,
    LogNotifier, Notifier, SourceImage, DEFAULT_QUALITY, MAX_EDGE,
};
pub use crate::download::{download_all, download_one};
pub use crate::utils::{load_source_image, CompressorError, CompressorResult};

// This library file is used as a public API for consuming this crate as a library.
// The CLI entry point is in main.rs.
