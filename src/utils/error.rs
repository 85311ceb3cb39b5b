//! Error types for the batch compressor.
//!
//! Provides a small hierarchy using `thiserror` for ergonomic error handling.

use std::io;
use serde::Serialize;
use thiserror::Error;

/// Main error type for the compressor.
///
/// Only [`CompressorError::NoValidInput`] is ever surfaced to the user;
/// per-item decode and encode failures are caught inside the batch loop,
/// logged, and the item is dropped from the result list.
#[derive(Error, Debug, Serialize)]
pub enum CompressorError {
    /// The input set contained no files with an image MIME type
    #[error("No valid image files in input")]
    NoValidInput,

    /// Image data could not be decoded (corrupt or unsupported)
    #[error("Decode error: {0}")]
    Decode(String),

    /// Re-encoding the resized pixel buffer failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),

    /// A blocking compression task panicked or was aborted
    #[error("Task error: {0}")]
    Task(String),
}

/// Convenience result type for compressor operations.
pub type CompressorResult<T> = Result<T, CompressorError>;

// Helper methods for error creation
impl CompressorError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn task<T: Into<String>>(msg: T) -> Self {
        Self::Task(msg.into())
    }
}

// Convert std::io::Error to CompressorError
impl From<io::Error> for CompressorError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
