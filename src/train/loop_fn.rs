use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::math::matrix::Matrix;
use crate::network::classifier::Classifier;
use crate::network::network::Network;
use crate::optim::Optimizer;
use crate::train::history::TrainingHistory;
use crate::train::train_config::TrainConfig;

/// Trains `network` for exactly `config.epochs` full-batch epochs and
/// returns the recorded metric history.
///
/// Each epoch:
/// 1. forward pass over the whole training split (gradients are recomputed
///    from scratch, so nothing accumulates between epochs)
/// 2. mean cross-entropy loss between logits and training labels
/// 3. backward pass producing per-layer parameter gradients
/// 4. one optimizer step mutating parameters in place
/// 5. loss plus train/test accuracy (via `predict`) appended to the history
/// 6. every `config.log_every` epochs, a progress line on stdout
///
/// There is no early stopping, convergence check, or checkpointing; a
/// diverging loss simply shows up in the history. `epochs == 0` performs no
/// work and returns an empty history.
///
/// # Panics
/// Panics if the training split is empty (with a non-zero epoch count) or
/// feature/label lengths mismatch.
pub fn train_loop<O: Optimizer>(
    network: &mut Network,
    train_features: &Matrix,
    train_labels: &[usize],
    test_features: &Matrix,
    test_labels: &[usize],
    optimizer: &mut O,
    config: &TrainConfig,
) -> TrainingHistory {
    assert_eq!(
        train_features.rows,
        train_labels.len(),
        "train features and labels must have equal length"
    );
    assert_eq!(
        test_features.rows,
        test_labels.len(),
        "test features and labels must have equal length"
    );

    let mut history = TrainingHistory::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        // ── Forward, loss, backward, update ────────────────────────────────
        let logits = network.forward_cached(train_features);
        let loss = CrossEntropyLoss::loss(&logits, train_labels);
        let delta = CrossEntropyLoss::gradient(&logits, train_labels);
        let grads = network.backward(train_features, &delta);
        optimizer.step(network, grads);

        // ── Record metrics ─────────────────────────────────────────────────
        let train_acc = accuracy(&network.predict(train_features), train_labels);
        let test_acc = accuracy(&network.predict(test_features), test_labels);
        history.loss.push(loss);
        history.train_accuracy.push(train_acc);
        history.test_accuracy.push(test_acc);

        // ── Emit progress ──────────────────────────────────────────────────
        if config.log_every > 0 && epoch % config.log_every == 0 {
            println!("Epoch {epoch}: loss = {loss:.4}, train accuracy = {train_acc:.3}");
        }
    }

    history
}

/// Fraction of exact label matches, in [0, 1]. An empty set scores 0.
pub fn accuracy(predicted: &[usize], expected: &[usize]) -> f64 {
    assert_eq!(predicted.len(), expected.len(), "prediction/label length mismatch");
    let n = expected.len();
    if n == 0 {
        return 0.0;
    }
    let correct = predicted.iter().zip(expected.iter())
        .filter(|(p, e)| p == e)
        .count();
    correct as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::blobs::make_blobs;
    use crate::data::split::train_test_split;
    use crate::optim::{Adam, Sgd};

    #[test]
    fn accuracy_counts_exact_matches() {
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn history_lengths_equal_the_epoch_count() {
        let (features, labels) = make_blobs(60, 2);
        let (train_x, test_x, train_y, test_y) = train_test_split(&features, &labels, 0.25);

        let mut network = Network::blob_classifier(2);
        let mut adam = Adam::new(&network, 0.01);
        let config = TrainConfig { epochs: 7, log_every: 0 };

        let history = train_loop(&mut network, &train_x, &train_y, &test_x, &test_y, &mut adam, &config);
        assert_eq!(history.loss.len(), 7);
        assert_eq!(history.train_accuracy.len(), 7);
        assert_eq!(history.test_accuracy.len(), 7);
        assert_eq!(history.epochs(), 7);
    }

    #[test]
    fn recorded_accuracies_stay_in_unit_interval() {
        let (features, labels) = make_blobs(80, 3);
        let (train_x, test_x, train_y, test_y) = train_test_split(&features, &labels, 0.25);

        let mut network = Network::blob_classifier(3);
        let mut sgd = Sgd::new(0.05);
        let config = TrainConfig { epochs: 5, log_every: 0 };

        let history = train_loop(&mut network, &train_x, &train_y, &test_x, &test_y, &mut sgd, &config);
        for (&train_acc, &test_acc) in history.train_accuracy.iter().zip(&history.test_accuracy) {
            assert!((0.0..=1.0).contains(&train_acc));
            assert!((0.0..=1.0).contains(&test_acc));
        }
    }

    #[test]
    fn zero_epochs_is_a_no_op() {
        let (features, labels) = make_blobs(40, 2);
        let (train_x, test_x, train_y, test_y) = train_test_split(&features, &labels, 0.25);

        let mut network = Network::blob_classifier(2);
        let before = network.clone();
        let mut adam = Adam::new(&network, 0.01);
        let config = TrainConfig { epochs: 0, log_every: 0 };

        let history = train_loop(&mut network, &train_x, &train_y, &test_x, &test_y, &mut adam, &config);
        assert_eq!(history.epochs(), 0);
        assert_eq!(adam.steps(), 0);
        for (a, b) in network.layers.iter().zip(&before.layers) {
            assert_eq!(a.weights, b.weights);
            assert_eq!(a.biases, b.biases);
        }
    }

    #[test]
    fn loss_decreases_on_separable_blobs() {
        let (features, labels) = make_blobs(120, 2);
        let (train_x, test_x, train_y, test_y) = train_test_split(&features, &labels, 0.25);

        let mut network = Network::blob_classifier(2);
        let mut adam = Adam::new(&network, 0.01);
        let config = TrainConfig { epochs: 50, log_every: 0 };

        let history = train_loop(&mut network, &train_x, &train_y, &test_x, &test_y, &mut adam, &config);
        assert!(history.loss.iter().all(|l| l.is_finite()));
        assert!(history.loss[49] < history.loss[0]);
    }
}
