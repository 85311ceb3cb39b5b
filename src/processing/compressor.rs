//! Single-item compression pipeline: decode, clamp, re-encode, account.

use tracing::debug;

use crate::core::{compression_ratio, CompressionResult, CompressionSettings, SourceImage};
use crate::processing::codec;
use crate::processing::resize::apply_resize;
use crate::utils::{format_size, CompressorError, CompressorResult, EncodeFormat};

/// Compress one input image synchronously.
///
/// Runs on the blocking pool when called from the batch loop. The decoded
/// and encoded buffers live only for the duration of this call; on success
/// the encoded bytes move into the returned result.
pub fn compress_single(
    source: &SourceImage,
    settings: &CompressionSettings,
    id: String,
) -> CompressorResult<CompressionResult> {
    let format = EncodeFormat::from_mime(&source.mime)
        .ok_or_else(|| CompressorError::format(format!("Not an image MIME type: {}", source.mime)))?;

    let image = codec::decode(&source.bytes)?;

    debug!(
        "Decoded '{}': {}x{} ({})",
        source.name,
        image.width(),
        image.height(),
        format_size(source.size)
    );

    let image = apply_resize(image, settings.max_edge);
    let data = codec::encode(&image, format, settings.quality)?;

    let encoded_size = data.len() as u64;
    let ratio = compression_ratio(source.size, encoded_size);

    debug!(
        "'{}' -> {} ({}% smaller)",
        source.name,
        format_size(encoded_size),
        ratio
    );

    Ok(CompressionResult {
        id,
        name: source.name.clone(),
        mime: format.mime().to_string(),
        original_size: source.size,
        encoded_size,
        ratio,
        data,
    })
}
