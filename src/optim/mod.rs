pub mod adam;
pub mod sgd;

pub use adam::Adam;
pub use sgd::Sgd;

use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// A first-order parameter updater.
///
/// `grads` holds one (weights_grad, biases_grad) pair per layer, in layer
/// order, as produced by `Network::backward`. Implementations mutate the
/// network's parameters in place; any internal state (moment estimates)
/// lives in the optimizer value and persists across steps.
pub trait Optimizer {
    fn step(&mut self, network: &mut Network, grads: Vec<(Matrix, Matrix)>);
}
