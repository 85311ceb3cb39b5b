//! Output boundary: materialize encoded results as downloadable artifacts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;
use tracing::debug;

use crate::core::CompressionResult;
use crate::utils::{CompressorError, CompressorResult};

/// Delay between artifacts in [`download_all`], so a large batch does not
/// fire every download trigger at once.
pub const DOWNLOAD_STAGGER: Duration = Duration::from_millis(100);

/// Artifact file name for a result: `compressed_<original name>`.
pub fn artifact_name(original_name: &str) -> String {
    format!("compressed_{original_name}")
}

/// Write one result's encoded bytes into `dir` under its artifact name.
///
/// The artifact is byte-identical to the encoded buffer. Returns the path
/// written.
pub async fn download_one(
    result: &CompressionResult,
    dir: impl AsRef<Path>,
) -> CompressorResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .await
        .map_err(|e| CompressorError::Io(format!("Cannot create output directory: {e}")))?;

    let path = dir.join(artifact_name(&result.name));
    fs::write(&path, &result.data)
        .await
        .map_err(|e| CompressorError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    debug!("Wrote {}", path.display());
    Ok(path)
}

/// Write every result into `dir`, pausing briefly between items.
pub async fn download_all(
    results: &[CompressionResult],
    dir: impl AsRef<Path>,
) -> CompressorResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(DOWNLOAD_STAGGER).await;
        }
        paths.push(download_one(result, dir).await?);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, data: Vec<u8>) -> CompressionResult {
        CompressionResult {
            id: "1-0".into(),
            name: name.into(),
            mime: "image/png".into(),
            original_size: data.len() as u64 * 2,
            encoded_size: data.len() as u64,
            ratio: 50,
            data,
        }
    }

    #[test]
    fn artifact_name_carries_prefix() {
        assert_eq!(artifact_name("photo.jpg"), "compressed_photo.jpg");
    }

    #[tokio::test]
    async fn download_one_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let result = result("photo.png", vec![9, 8, 7, 6]);

        let path = download_one(&result, dir.path()).await.unwrap();

        assert_eq!(path.file_name().unwrap(), "compressed_photo.png");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![9, 8, 7, 6]);
    }

    #[tokio::test]
    async fn download_all_writes_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![result("a.png", vec![1]), result("b.png", vec![2])];

        let paths = download_all(&results, dir.path()).await.unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(tokio::fs::read(&paths[0]).await.unwrap(), vec![1]);
        assert_eq!(tokio::fs::read(&paths[1]).await.unwrap(), vec![2]);
    }
}
