use serde::{Serialize, Deserialize};

/// Per-epoch metric sequences recorded by `train_loop`.
///
/// One slot per epoch is written to each sequence, indexed by epoch number;
/// after training the history is read-only and consumed by the plotting
/// module. All three vectors are exactly `epochs` long.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Mean cross-entropy loss on the training split.
    pub loss: Vec<f64>,
    /// Exact-match accuracy on the training split, in [0, 1].
    pub train_accuracy: Vec<f64>,
    /// Exact-match accuracy on the evaluation split, in [0, 1].
    pub test_accuracy: Vec<f64>,
}

impl TrainingHistory {
    pub fn with_capacity(epochs: usize) -> Self {
        TrainingHistory {
            loss: Vec::with_capacity(epochs),
            train_accuracy: Vec::with_capacity(epochs),
            test_accuracy: Vec::with_capacity(epochs),
        }
    }

    /// Number of completed epochs on record.
    pub fn epochs(&self) -> usize {
        self.loss.len()
    }
}
