use serde::{Deserialize, Serialize};

/// Output encoding selected for a re-encode pass.
///
/// The pipeline keeps the input format where it can. Image MIME types
/// outside this set (e.g. `image/bmp`, `image/tiff`) fall back to PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeFormat {
    Jpeg,
    Png,
    WebP,
}

impl EncodeFormat {
    /// Resolve the encode format for an input MIME type.
    ///
    /// Returns `None` when the MIME type does not indicate an image at all.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return None;
        }

        match mime.as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            // Any other image subtype re-encodes as PNG
            _ => Some(Self::Png),
        }
    }

    /// MIME type of the encoded output.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// Whether the quality factor has any effect for this format.
    ///
    /// PNG is lossless and the WebP encoder here is lossless-only, so the
    /// quality factor only drives the JPEG encoder.
    pub fn honours_quality(&self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// MIME type for a file extension, used when inputs come from the
/// filesystem and carry no declared type.
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Format a byte count as a short human-readable string (B/KB/MB/GB).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}
