//! Batch orchestration and result list ownership.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::core::notify::{LogNotifier, Notifier};
use crate::core::progress::BatchProgress;
use crate::core::source::SourceImage;
use crate::core::types::{BatchSummary, CompressionResult, CompressionSettings};
use crate::processing::compress_single;
use crate::processing::filter_images;
use crate::utils::{CompressorError, CompressorResult};

/// One compression session: owns the result list and the progress fraction.
///
/// Both are explicit fields mutated only at item boundaries inside
/// [`compress_batch`](Self::compress_batch), never concurrently. A new batch
/// fully replaces the previous result list.
pub struct CompressorSession {
    settings: CompressionSettings,
    notifier: Arc<dyn Notifier>,
    results: Vec<CompressionResult>,
    progress: f64,
}

impl Default for CompressorSession {
    fn default() -> Self {
        Self::new(CompressionSettings::default())
    }
}

impl CompressorSession {
    pub fn new(settings: CompressionSettings) -> Self {
        Self {
            settings,
            notifier: Arc::new(LogNotifier),
            results: Vec::new(),
            progress: 0.0,
        }
    }

    /// Replace the default logging notifier with a caller-supplied one.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn settings(&self) -> &CompressionSettings {
        &self.settings
    }

    /// Results of the most recent completed batch, in input order.
    pub fn results(&self) -> &[CompressionResult] {
        &self.results
    }

    /// Current progress fraction: 0 outside a batch, attempted/total inside.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Compress a set of input files. See [`compress_batch_with_progress`](Self::compress_batch_with_progress).
    pub async fn compress_batch(
        &mut self,
        files: Vec<SourceImage>,
    ) -> CompressorResult<&[CompressionResult]> {
        self.compress_batch_with_progress(files, |_| {}).await
    }

    /// Compress a set of input files, invoking `on_progress` after every
    /// attempted item.
    ///
    /// Inputs whose MIME type does not indicate an image are filtered out
    /// before processing; an empty filtered set fails with
    /// [`CompressorError::NoValidInput`] and no processing is attempted.
    /// Remaining items are processed strictly sequentially in input order,
    /// each awaited before the next starts. Items that fail to decode are
    /// logged and skipped; they advance progress but produce no result.
    /// On completion the session's result list is replaced with the new
    /// batch's successes and a summary notification reports their count.
    pub async fn compress_batch_with_progress(
        &mut self,
        files: Vec<SourceImage>,
        on_progress: impl Fn(BatchProgress),
    ) -> CompressorResult<&[CompressionResult]> {
        let images = filter_images(files);

        if images.is_empty() {
            self.notifier
                .notify_error("Please select valid image files");
            return Err(CompressorError::NoValidInput);
        }

        let total = images.len();
        let batch_id = batch_epoch_millis();
        info!("Compressing batch of {} images", total);

        self.progress = 0.0;
        let mut successes: Vec<CompressionResult> = Vec::with_capacity(total);
        let mut attempted = 0;

        for (index, image) in images.into_iter().enumerate() {
            let id = format!("{batch_id}-{index}");
            let name = image.name.clone();
            let settings = self.settings.clone();

            // Pixel work runs on the blocking pool; awaiting each item before
            // dispatching the next preserves input order in the result list.
            let outcome =
                tokio::task::spawn_blocking(move || compress_single(&image, &settings, id))
                    .await
                    .map_err(|e| {
                        CompressorError::task(format!("Compression task panicked: {e}"))
                    })?;

            match outcome {
                Ok(result) => successes.push(result),
                Err(e) => {
                    // Silent-skip policy: logged, excluded from results,
                    // never surfaced per-item.
                    warn!("Skipping '{}': {}", name, e);
                }
            }

            attempted += 1;
            self.progress = attempted as f64 / total as f64;
            on_progress(BatchProgress::new(attempted, total));
        }

        let summary = BatchSummary {
            succeeded: successes.len(),
            attempted,
            total_original_bytes: successes.iter().map(|r| r.original_size).sum(),
            total_encoded_bytes: successes.iter().map(|r| r.encoded_size).sum(),
        };
        debug!(
            "Batch complete: {}/{} succeeded, {} -> {} bytes",
            summary.succeeded,
            summary.attempted,
            summary.total_original_bytes,
            summary.total_encoded_bytes
        );

        self.notifier
            .notify_success(&format!("{} images compressed", summary.succeeded));

        self.results = successes;
        self.progress = 0.0;
        Ok(&self.results)
    }

    /// Drop the result with the given id. No-op if absent.
    ///
    /// Returns whether a result was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.results.len();
        self.results.retain(|r| r.id != id);
        self.results.len() < before
    }
}

/// Millisecond timestamp used to namespace result ids per batch.
fn batch_epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
