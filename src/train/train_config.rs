/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    — number of full-batch forward/backward/update passes;
///                 the loop always runs exactly this many, with no early
///                 stopping or convergence check
/// - `log_every` — emit a console progress line every this many epochs
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a config with the default progress cadence (every 10 epochs).
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: 10,
        }
    }
}
