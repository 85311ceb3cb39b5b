//! Core types and session state.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`CompressorSession`]: batch orchestrator owning results and progress
//! - [`SourceImage`]: an input file handle
//! - [`CompressionSettings`] / [`CompressionResult`]: settings and outcomes
//! - [`BatchProgress`]: progress reporting for running batches
//! - [`Notifier`]: the outward notification boundary

mod notify;
mod progress;
mod session;
mod source;
mod types;

pub use notify::{LogNotifier, Notifier};
pub use progress::BatchProgress;
pub use session::CompressorSession;
pub use source::SourceImage;
pub use types::{
    compression_ratio, BatchSummary, CompressionResult, CompressionSettings, DEFAULT_QUALITY,
    MAX_EDGE,
};
