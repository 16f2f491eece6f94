pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::classifier::Classifier;
pub use network::network::Network;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use optim::{Adam, Optimizer, Sgd};
pub use data::blobs::make_blobs;
pub use data::split::{train_test_split, DEFAULT_TEST_FRACTION};
pub use train::history::TrainingHistory;
pub use train::loop_fn::{accuracy, train_loop};
pub use train::train_config::TrainConfig;
