use serde::{Serialize, Deserialize};

/// Element-wise activations used by this crate's dense layers.
///
/// `ReLU` sits between the two linear transforms of the blob classifier;
/// `Identity` is the output layer's "activation" so that the network emits
/// raw logits for the cross-entropy loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative of the activation, evaluated at the
    /// pre-activation value z.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
        }
    }
}
