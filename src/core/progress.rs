use serde::{Deserialize, Serialize};

/// Progress of a running batch, reported after each attempted item.
///
/// The fraction is monotonically non-decreasing over a batch and reaches
/// exactly 1.0 when the last item has been attempted, whether or not it
/// produced a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgress {
    /// Items attempted so far (successes and skips both count)
    pub attempted: usize,
    /// Total number of image-type items in the batch
    pub total: usize,
    /// attempted / total, in [0.0, 1.0]
    pub fraction: f64,
}

impl BatchProgress {
    pub fn new(attempted: usize, total: usize) -> Self {
        let fraction = if total > 0 {
            attempted as f64 / total as f64
        } else {
            0.0
        };

        Self {
            attempted,
            total,
            fraction,
        }
    }

    /// Progress as a whole percentage (0-100), for display.
    pub fn percentage(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_reaches_one_on_last_item() {
        let progress = BatchProgress::new(4, 4);
        assert_eq!(progress.fraction, 1.0);
        assert_eq!(progress.percentage(), 100);
    }

    #[test]
    fn fraction_is_zero_for_empty_total() {
        let progress = BatchProgress::new(0, 0);
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn percentage_rounds_to_whole_numbers() {
        assert_eq!(BatchProgress::new(1, 3).percentage(), 33);
        assert_eq!(BatchProgress::new(2, 3).percentage(), 67);
    }
}
