//! Core types for compression settings and results.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Longest-side pixel bound above which images are downscaled.
pub const MAX_EDGE: u32 = 1920;

/// Default encode quality on the 1-100 scale (a 0.7 quality factor).
pub const DEFAULT_QUALITY: u8 = 70;

/// Configuration for one compression session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// Encode quality (1-100), applied to lossy output formats
    pub quality: u8,
    /// Maximum edge length in pixels; larger images are scaled down
    #[serde(rename = "maxEdge")]
    pub max_edge: u32,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_edge: MAX_EDGE,
        }
    }
}

/// Result of compressing one input image.
///
/// A result exists only after a successful encode; `encoded_size` and
/// `ratio` always derive from the same encode pass. The encoded bytes are
/// owned by the result and released when it is discarded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    /// Unique per batch item, stable for the lifetime of the result list
    pub id: String,
    /// Original file name
    pub name: String,
    /// MIME type of the encoded output
    pub mime: String,
    /// Original file size in bytes
    pub original_size: u64,
    /// Encoded output size in bytes
    pub encoded_size: u64,
    /// Size reduction percentage, always in [0, 100]
    pub ratio: u32,
    /// Encoded image bytes
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl CompressionResult {
    /// The encoded image as a data URI, for embedding callers.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}

/// Size reduction percentage of an encode pass.
///
/// `max(0, round(100 * (1 - encoded/original)))` — never negative, even when
/// the encoded output is larger than the original.
pub fn compression_ratio(original_size: u64, encoded_size: u64) -> u32 {
    if original_size == 0 {
        return 0;
    }

    let ratio = (1.0 - encoded_size as f64 / original_size as f64) * 100.0;
    ratio.round().max(0.0) as u32
}

/// Aggregate outcome of one batch, reported after completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Number of images that produced a result
    pub succeeded: usize,
    /// Number of image-type inputs attempted
    pub attempted: usize,
    /// Total input bytes across successful items
    pub total_original_bytes: u64,
    /// Total output bytes across successful items
    pub total_encoded_bytes: u64,
}
