pub mod history;
pub mod loop_fn;
pub mod train_config;

pub use history::TrainingHistory;
pub use loop_fn::{accuracy, train_loop};
pub use train_config::TrainConfig;
