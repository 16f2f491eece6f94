//! End-to-end demo: generate 2D blobs, train the two-layer classifier, and
//! render the plots.
//!
//! Run with:
//!   cargo run --release
//!
//! Writes plots/scatter.png, plots/loss.png, plots/accuracy.png,
//! plots/boundary.png and the trained weights as model.json.

use blobnet::{
    accuracy, make_blobs, train_loop, train_test_split, Adam, Classifier, Matrix, Network,
    TrainConfig, DEFAULT_TEST_FRACTION,
};
use blobnet::plot::{accuracy_curves, decision_boundary, loss_curve, scatter_plot};

const SAMPLE_COUNT: usize = 200;
const LABEL_COUNT: usize = 2;
const EPOCHS: usize = 100;
const LEARNING_RATE: f64 = 0.005;

fn main() -> std::io::Result<()> {
    // Two warm-up sanity checks on the matrix type before touching real
    // data: an all-zero matrix has zero min/max, and uniform entries stay
    // inside the unit interval.
    let zeros = Matrix::zeros(4, 4);
    assert!(zeros.min() == 0.0 && zeros.max() == 0.0);
    let uniform = Matrix::uniform(4, 4);
    assert!(uniform.min() >= 0.0 && uniform.max() <= 1.0);

    // ── Data ───────────────────────────────────────────────────────────────
    let (features, labels) = make_blobs(SAMPLE_COUNT, LABEL_COUNT);
    println!("Generated {} samples around {} centers.", features.rows, LABEL_COUNT);

    std::fs::create_dir_all("plots")?;
    scatter_plot(&features, &labels, "plots/scatter.png")?;

    let (train_x, test_x, train_y, test_y) =
        train_test_split(&features, &labels, DEFAULT_TEST_FRACTION);
    println!("Split: {} train / {} test.", train_y.len(), test_y.len());

    // ── Model & training ───────────────────────────────────────────────────
    let mut network = Network::blob_classifier(LABEL_COUNT);
    let mut optimizer = Adam::new(&network, LEARNING_RATE);
    let config = TrainConfig::new(EPOCHS);

    let history = train_loop(
        &mut network,
        &train_x,
        &train_y,
        &test_x,
        &test_y,
        &mut optimizer,
        &config,
    );

    let final_train_acc = accuracy(&network.predict(&train_x), &train_y);
    let final_test_acc = accuracy(&network.predict(&test_x), &test_y);
    println!("Final train accuracy: {final_train_acc:.3}");
    println!("Final test accuracy:  {final_test_acc:.3}");

    // ── Plots & saved weights ──────────────────────────────────────────────
    loss_curve(&history, "plots/loss.png")?;
    accuracy_curves(&history, "plots/accuracy.png")?;
    decision_boundary(&network, &features, &labels, "plots/boundary.png")?;
    network.save_json("model.json")?;
    println!("Wrote plots/ and model.json.");

    Ok(())
}
