use std::path::Path;
use tokio::fs;
use crate::core::SourceImage;
use crate::utils::{formats, CompressorError, CompressorResult};

/// Load a file from disk as a [`SourceImage`].
///
/// The MIME type is derived from the file extension where possible and
/// otherwise sniffed from the file signature, so files with odd or missing
/// extensions still enter the pipeline with a usable declared type.
pub async fn load_source_image(path: impl AsRef<Path>) -> CompressorResult<SourceImage> {
    let path = path.as_ref();

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CompressorError::Io(format!("Invalid file name: {}", path.display())))?
        .to_string();

    let bytes = fs::read(path)
        .await
        .map_err(|e| CompressorError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mime = detect_mime(path, &bytes);

    Ok(SourceImage::new(name, mime, bytes))
}

/// MIME type from extension, falling back to content sniffing.
fn detect_mime(path: &Path, bytes: &[u8]) -> String {
    if let Some(mime) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(formats::mime_from_extension)
    {
        return mime.to_string();
    }

    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
