use crate::math::matrix::Matrix;

/// Multi-class cross-entropy computed from raw logits and integer labels.
///
/// The softmax is folded into the loss (the network's output layer emits
/// unnormalized scores), so both the scalar loss and the gradient work on
/// logits directly. Everything is mean-reduced over the batch.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Mean batch loss:
    ///   L = mean_i( logsumexp(logits_i) - logits_i[label_i] )
    ///
    /// The log-sum-exp is shifted by the row maximum so large logits cannot
    /// overflow the exponentials.
    ///
    /// # Panics
    /// Panics if the batch is empty, a label is out of range, or the label
    /// count does not match the number of logit rows.
    pub fn loss(logits: &Matrix, labels: &[usize]) -> f64 {
        assert!(logits.rows > 0, "loss over an empty batch");
        assert_eq!(logits.rows, labels.len(), "one label per logit row required");

        let total: f64 = logits.data.iter().zip(labels.iter())
            .map(|(row, &label)| {
                assert!(label < row.len(), "label {} out of range for {} classes", label, row.len());
                log_sum_exp(row) - row[label]
            })
            .sum();

        total / logits.rows as f64
    }

    /// Gradient of the mean batch loss w.r.t. the logits:
    ///   ∂L/∂logits_i = (softmax(logits_i) - onehot(label_i)) / batch_size
    ///
    /// This is the initial delta passed into the backward pass; the 1/n is
    /// folded in here so layer gradients need no further scaling.
    pub fn gradient(logits: &Matrix, labels: &[usize]) -> Matrix {
        assert!(logits.rows > 0, "gradient over an empty batch");
        assert_eq!(logits.rows, labels.len(), "one label per logit row required");

        let inv_batch = 1.0 / logits.rows as f64;
        let data = logits.data.iter().zip(labels.iter())
            .map(|(row, &label)| {
                assert!(label < row.len(), "label {} out of range for {} classes", label, row.len());
                let probs = softmax(row);
                probs.into_iter()
                    .enumerate()
                    .map(|(j, p)| {
                        let target = if j == label { 1.0 } else { 0.0 };
                        (p - target) * inv_batch
                    })
                    .collect()
            })
            .collect();

        Matrix::from_data(data)
    }
}

/// Numerically stable log(Σ exp(x_j)).
fn log_sum_exp(row: &[f64]) -> f64 {
    let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = row.iter().map(|x| (x - max).exp()).sum();
    max + sum.ln()
}

/// Numerically stable softmax of one logit row.
fn softmax(row: &[f64]) -> Vec<f64> {
    let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = row.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
