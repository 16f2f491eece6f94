use crate::{activation::activation::ActivationFunction, layers::dense::Layer, math::matrix::Matrix};
use serde::{Serialize, Deserialize};

/// Width of the hidden layer built by `Network::blob_classifier`.
pub const HIDDEN_SIZE: usize = 50;

/// Input dimensionality of the blob classifier (2D points).
pub const INPUT_SIZE: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation))
            .collect();
        Network { layers }
    }

    /// The canonical two-layer blob classifier:
    /// 2 → HIDDEN_SIZE (ReLU) → label_count (raw logits).
    pub fn blob_classifier(label_count: usize) -> Network {
        Network::new(vec![
            (HIDDEN_SIZE, INPUT_SIZE, ActivationFunction::ReLU),
            (label_count, HIDDEN_SIZE, ActivationFunction::Identity),
        ])
    }

    /// Batch forward pass returning raw logits; does not touch the caches.
    pub fn forward_batch(&self, inputs: &Matrix) -> Matrix {
        let mut current = inputs.clone();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Batch forward pass that stores per-layer activations for backprop.
    pub fn forward_cached(&mut self, inputs: &Matrix) -> Matrix {
        let mut current = inputs.clone();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Backward pass over a batch previously run through `forward_cached`.
    ///
    /// `output_delta` is ∂L/∂logits (one row per sample). Returns one
    /// (weights_grad, biases_grad) pair per layer, in layer order.
    pub fn backward(&self, inputs: &Matrix, output_delta: &Matrix) -> Vec<(Matrix, Matrix)> {
        let mut grads: Vec<(Matrix, Matrix)> = self.layers.iter()
            .map(|_| (Matrix::default(), Matrix::default()))
            .collect();

        let mut delta = output_delta.clone();
        for i in (0..self.layers.len()).rev() {
            let input_for_layer = if i == 0 {
                inputs.clone()
            } else {
                self.layers[i - 1].cached_activations().clone()
            };

            let (w_grad, b_grad, layer_delta) =
                self.layers[i].compute_gradients(&delta, &input_for_layer);

            if i > 0 {
                // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                delta = layer_delta * self.layers[i].weights.transpose();
            }

            grads[i] = (w_grad, b_grad);
        }

        grads
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`. Weights survive the round-trip bit-identically
    /// (serde_json's `float_roundtrip` parsing).
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
