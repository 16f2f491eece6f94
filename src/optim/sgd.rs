use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;

/// Plain gradient descent with a fixed learning rate. Stateless; kept as the
/// baseline to contrast with `Adam`.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, network: &mut Network, grads: Vec<(Matrix, Matrix)>) {
        assert_eq!(grads.len(), network.layers.len(), "one gradient pair per layer required");

        for (layer, (w_grad, b_grad)) in network.layers.iter_mut().zip(grads) {
            layer.apply_gradients(w_grad, b_grad, self.learning_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    #[test]
    fn step_subtracts_lr_scaled_gradients() {
        let mut network = Network::new(vec![(1, 1, ActivationFunction::Identity)]);
        network.layers[0].weights.data[0][0] = 1.0;
        network.layers[0].biases.data[0][0] = 2.0;

        let grads = vec![(
            Matrix::from_data(vec![vec![3.0]]),
            Matrix::from_data(vec![vec![4.0]]),
        )];
        let mut sgd = Sgd::new(0.1);
        sgd.step(&mut network, grads);

        assert!((network.layers[0].weights.data[0][0] - 0.7).abs() < 1e-12);
        assert!((network.layers[0].biases.data[0][0] - 1.6).abs() < 1e-12);
    }
}
