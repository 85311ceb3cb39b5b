//! Dimension clamping for the maximum-edge resize policy.

use image::imageops::FilterType;
use image::DynamicImage;

/// Target dimensions for an image under a maximum edge length.
///
/// Dimensions already within the bound are returned unchanged; otherwise
/// both are scaled by `max_edge / max(width, height)` with rounding, so the
/// larger dimension lands exactly on the bound and the aspect ratio is
/// preserved to rounding. Never upscales and never returns zero.
pub fn target_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    let scale = max_edge as f64 / width.max(height) as f64;
    let new_w = ((width as f64 * scale).round() as u32).max(1);
    let new_h = ((height as f64 * scale).round() as u32).max(1);
    (new_w, new_h)
}

/// Resize `image` to fit within `max_edge`, returning it unchanged when it
/// already fits.
pub fn apply_resize(image: DynamicImage, max_edge: u32) -> DynamicImage {
    let (w, h) = (image.width(), image.height());
    let (target_w, target_h) = target_dimensions(w, h, max_edge);

    if (target_w, target_h) == (w, h) {
        return image;
    }

    image.resize_exact(target_w, target_h, FilterType::Lanczos3)
}
