use tracing::{error, info};

/// Outward notification boundary.
///
/// Exactly two message kinds cross it: an error when the input set contains
/// no valid images, and a success summary after a batch completes. Per-item
/// failures never reach the notifier.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
    fn notify_success(&self, message: &str);
}

/// Default notifier that logs through `tracing`.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!("{message}");
    }

    fn notify_success(&self, message: &str) {
        info!("{message}");
    }
}
