//! End-to-end scenarios exercising the public API the way the demo binary
//! does: generate, split, train, predict.

use blobnet::{
    accuracy, make_blobs, train_loop, train_test_split, Adam, Classifier, Matrix, Network,
    TrainConfig, DEFAULT_TEST_FRACTION,
};

#[test]
fn two_class_model_contract_on_a_small_batch() {
    let network = Network::blob_classifier(2);
    let batch = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![1.0, -1.0],
        vec![-3.0, 2.0],
        vec![5.0, 5.0],
    ]);

    let logits = network.forward(&batch);
    assert_eq!((logits.rows, logits.cols), (4, 2));

    let predictions = network.predict(&batch);
    assert_eq!(predictions.len(), 4);
    assert!(predictions.iter().all(|&label| label < 2));
}

#[test]
fn doubling_output_weights_preserves_predictions() {
    // Scaling every logit by the same positive factor must not move the
    // arg-max; scale them by doubling the output layer's parameters.
    let mut network = Network::blob_classifier(3);
    let batch = Matrix::uniform(10, 2).map(|x| x * 8.0 - 4.0);
    let before = network.predict(&batch);

    network.layers[1].weights = network.layers[1].weights.map(|x| x * 2.0);
    network.layers[1].biases = network.layers[1].biases.map(|x| x * 2.0);

    assert_eq!(network.predict(&batch), before);
}

#[test]
fn default_split_of_200_samples_partitions_exactly() {
    let (features, labels) = make_blobs(200, 2);
    let (train_x, test_x, train_y, test_y) =
        train_test_split(&features, &labels, DEFAULT_TEST_FRACTION);

    assert_eq!(train_x.rows + test_x.rows, 200);
    assert_eq!(train_y.len() + test_y.len(), 200);
}

#[test]
fn zero_epoch_training_leaves_the_model_untouched() {
    let (features, labels) = make_blobs(80, 2);
    let (train_x, test_x, train_y, test_y) =
        train_test_split(&features, &labels, DEFAULT_TEST_FRACTION);

    let mut network = Network::blob_classifier(2);
    let snapshot = network.clone();
    let mut optimizer = Adam::new(&network, 0.005);
    let config = TrainConfig { epochs: 0, log_every: 0 };

    let history = train_loop(
        &mut network, &train_x, &train_y, &test_x, &test_y, &mut optimizer, &config,
    );

    assert_eq!(history.epochs(), 0);
    for (after, before) in network.layers.iter().zip(&snapshot.layers) {
        assert_eq!(after.weights, before.weights);
        assert_eq!(after.biases, before.biases);
    }
}

#[test]
fn full_run_records_one_metric_slot_per_epoch() {
    let (features, labels) = make_blobs(200, 2);
    let (train_x, test_x, train_y, test_y) =
        train_test_split(&features, &labels, DEFAULT_TEST_FRACTION);

    let mut network = Network::blob_classifier(2);
    let mut optimizer = Adam::new(&network, 0.005);
    let config = TrainConfig { epochs: 100, log_every: 0 };

    let history = train_loop(
        &mut network, &train_x, &train_y, &test_x, &test_y, &mut optimizer, &config,
    );

    assert_eq!(history.loss.len(), 100);
    assert_eq!(history.train_accuracy.len(), 100);
    assert_eq!(history.test_accuracy.len(), 100);
    assert!(history.train_accuracy.iter().all(|a| (0.0..=1.0).contains(a)));
    assert!(history.test_accuracy.iter().all(|a| (0.0..=1.0).contains(a)));

    let final_acc = accuracy(&network.predict(&train_x), &train_y);
    assert!((0.0..=1.0).contains(&final_acc));
}
