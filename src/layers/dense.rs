use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// A fully-connected layer operating on batches (one sample per row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,           // input_size × size
    pub biases: Matrix,            // 1 × size
    pub activator: ActivationFunction,
    #[serde(skip)]
    neurons: Matrix,               // batch activations cached by feed_from
    #[serde(skip)]
    pre_neurons: Matrix,           // pre-activation values (z = XW + b) needed for correct derivative
}

impl Layer {
    /// Weight init follows the activation: He before ReLU, Xavier otherwise.
    /// Biases start at zero.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        let weights = match activation {
            ActivationFunction::ReLU => Matrix::he(input_size, size),
            _ => Matrix::xavier(input_size, size),
        };
        let biases = Matrix::zeros(1, size);

        Layer {
            size,
            weights,
            biases,
            activator: activation,
            neurons: Matrix::default(),
            pre_neurons: Matrix::default(),
        }
    }

    /// Batch forward pass without touching the caches.
    pub fn forward(&self, inputs: &Matrix) -> Matrix {
        let z = inputs.clone() * self.weights.clone();
        z.add_row(&self.biases).map(|x| self.activator.function(x))
    }

    /// Batch forward pass that caches z and a for the backward pass.
    pub fn feed_from(&mut self, inputs: &Matrix) -> Matrix {
        let z = (inputs.clone() * self.weights.clone()).add_row(&self.biases);
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a
    }

    /// Activations cached by the last `feed_from` call.
    pub fn cached_activations(&self) -> &Matrix {
        &self.neurons
    }

    /// Computes gradient adjustments for a batch.
    /// Returns (weights_grad, biases_grad, layer_delta).
    ///
    /// `delta` is ∂L/∂a for this layer (error in activation space), one row
    /// per sample; `layer_delta` is ∂L/∂z, which the caller propagates to the
    /// previous layer through the transposed weights.
    pub fn compute_gradients(
        &self,
        delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // Element-wise (Hadamard) product: δ = error ⊙ σ'(z)
        let layer_delta = hadamard(delta, &act_derivative);

        let weights_grad = inputs.transpose() * layer_delta.clone();
        let biases_grad = layer_delta.col_sums();

        (weights_grad, biases_grad, layer_delta)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a.data.iter().zip(b.data.iter())
        .map(|(row_a, row_b)| {
            row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
        })
        .collect();
    Matrix::from_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_preserves_batch_size() {
        let layer = Layer::new(5, 2, ActivationFunction::ReLU);
        let batch = Matrix::uniform(7, 2);
        let out = layer.forward(&batch);
        assert_eq!((out.rows, out.cols), (7, 5));
    }

    #[test]
    fn relu_layer_never_outputs_negatives() {
        let layer = Layer::new(4, 3, ActivationFunction::ReLU);
        let batch = Matrix::uniform(10, 3).map(|x| x * 4.0 - 2.0);
        let out = layer.forward(&batch);
        assert!(out.min() >= 0.0);
    }

    #[test]
    fn feed_from_matches_forward() {
        let mut layer = Layer::new(3, 2, ActivationFunction::Identity);
        let batch = Matrix::uniform(4, 2);
        let pure = layer.forward(&batch);
        let cached = layer.feed_from(&batch);
        assert_eq!(pure, cached);
        assert_eq!(layer.cached_activations(), &cached);
    }

    #[test]
    fn identity_gradients_have_expected_shapes() {
        let mut layer = Layer::new(3, 2, ActivationFunction::Identity);
        let batch = Matrix::uniform(5, 2);
        layer.feed_from(&batch);

        let delta = Matrix::uniform(5, 3);
        let (w_grad, b_grad, layer_delta) = layer.compute_gradients(&delta, &batch);
        assert_eq!((w_grad.rows, w_grad.cols), (2, 3));
        assert_eq!((b_grad.rows, b_grad.cols), (1, 3));
        // Identity derivative is 1, so δ passes through unchanged.
        assert_eq!(layer_delta, delta);
    }

    #[test]
    fn apply_gradients_moves_against_the_gradient() {
        let mut layer = Layer::new(1, 1, ActivationFunction::Identity);
        layer.weights.data[0][0] = 1.0;
        layer.biases.data[0][0] = 2.0;

        let w_grad = Matrix::from_data(vec![vec![3.0]]);
        let b_grad = Matrix::from_data(vec![vec![4.0]]);
        layer.apply_gradients(w_grad, b_grad, 0.1);

        assert!((layer.weights.data[0][0] - 0.7).abs() < 1e-12);
        assert!((layer.biases.data[0][0] - 1.6).abs() < 1e-12);
    }
}
