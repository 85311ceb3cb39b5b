//! Decode and encode steps around the `image` crate codecs.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType};

use crate::utils::{CompressorError, CompressorResult, EncodeFormat};

/// Decode raw image bytes into a pixel buffer.
///
/// Failures here (corrupt data, formats the decoder does not support) take
/// the batch's silent-skip path.
pub fn decode(bytes: &[u8]) -> CompressorResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| CompressorError::decode(e.to_string()))
}

/// Encode a pixel buffer in the given format.
///
/// JPEG honours `quality` (1-100); PNG and WebP are lossless here and
/// ignore it.
pub fn encode(image: &DynamicImage, format: EncodeFormat, quality: u8) -> CompressorResult<Vec<u8>> {
    let mut buf = Vec::new();

    match format {
        EncodeFormat::Jpeg => {
            let rgb = image.to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            encoder
                .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
                .map_err(|e| CompressorError::encode(e.to_string()))?;
        }
        EncodeFormat::Png => {
            image
                .write_with_encoder(PngEncoder::new(&mut buf))
                .map_err(|e| CompressorError::encode(e.to_string()))?;
        }
        EncodeFormat::WebP => {
            // The lossless WebP encoder accepts RGB8/RGBA8 input only
            let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
            rgba.write_with_encoder(WebPEncoder::new_lossless(&mut buf))
                .map_err(|e| CompressorError::encode(e.to_string()))?;
        }
    }

    Ok(buf)
}
