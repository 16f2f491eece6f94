use crate::activation::activation::ActivationFunction;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// The seam between models and their read-only consumers.
///
/// The training-metric helpers and the decision-boundary plotter only ever
/// call `forward`/`predict`, so any architecture implementing this trait can
/// be dropped in without touching them.
pub trait Classifier {
    /// Batch of feature rows in, batch of raw logit rows out. No side effects.
    fn forward(&self, inputs: &Matrix) -> Matrix;

    /// One predicted class index per input row, each in [0, label_count).
    fn predict(&self, inputs: &Matrix) -> Vec<usize>;

    /// Number of classes this model scores.
    fn label_count(&self) -> usize;
}

impl Classifier for Network {
    fn forward(&self, inputs: &Matrix) -> Matrix {
        self.forward_batch(inputs)
    }

    /// Runs `forward`, applies ReLU to the logits once more, then takes the
    /// per-row arg-max.
    ///
    /// The extra ReLU is kept from the original design. It never changes a
    /// positive arg-max, but it clamps negative logits to zero, so a row
    /// whose logits are all negative ties at 0.0 and resolves to class 0
    /// under the first-occurrence policy below.
    fn predict(&self, inputs: &Matrix) -> Vec<usize> {
        let scores = self
            .forward_batch(inputs)
            .map(|x| ActivationFunction::ReLU.function(x));
        scores.data.iter().map(|row| argmax(row)).collect()
    }

    fn label_count(&self) -> usize {
        self.layers.last().map(|layer| layer.size).unwrap_or(0)
    }
}

/// Index of the maximum element; ties resolve to the lowest index.
pub fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in row.iter().enumerate().skip(1) {
        if x > row[best] {
            best = i;
        }
    }
    best
}
