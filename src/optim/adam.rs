use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;

/// Adaptive moment estimation (bias-corrected).
///
/// Keeps one first-moment and one second-moment matrix per parameter
/// matrix. The moments are allocated from the network's layer shapes at
/// construction and persist across steps for the life of the value; they
/// are never reset mid-run.
pub struct Adam {
    pub learning_rate: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    t: u64,
    beta1_pow: f64,
    beta2_pow: f64,
    moments: Vec<LayerMoments>,
}

struct LayerMoments {
    m_weights: Matrix,
    v_weights: Matrix,
    m_biases: Matrix,
    v_biases: Matrix,
}

impl Adam {
    /// Standard hyperparameters: β₁ = 0.9, β₂ = 0.999, ε = 1e-8.
    pub fn new(network: &Network, learning_rate: f64) -> Adam {
        Adam::with_hyperparams(network, learning_rate, 0.9, 0.999, 1e-8)
    }

    pub fn with_hyperparams(
        network: &Network,
        learning_rate: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    ) -> Adam {
        assert!(learning_rate.is_finite() && learning_rate > 0.0, "learning rate must be finite and > 0");
        assert!((0.0..1.0).contains(&beta1), "beta1 must be in [0, 1)");
        assert!((0.0..1.0).contains(&beta2), "beta2 must be in [0, 1)");
        assert!(eps > 0.0, "eps must be > 0");

        let moments = network.layers.iter()
            .map(|layer| LayerMoments {
                m_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                v_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                m_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
                v_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            })
            .collect();

        Adam {
            learning_rate,
            beta1,
            beta2,
            eps,
            t: 0,
            beta1_pow: 1.0,
            beta2_pow: 1.0,
            moments,
        }
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.t
    }

    /// Updates one moment pair in place and returns the bias-corrected
    /// update direction for the matching parameter matrix.
    fn direction(
        grad: &Matrix,
        m: &mut Matrix,
        v: &mut Matrix,
        beta1: f64,
        beta2: f64,
        eps: f64,
        corr1: f64,
        corr2: f64,
    ) -> Matrix {
        let mut dir = Matrix::zeros(grad.rows, grad.cols);
        for i in 0..grad.rows {
            for j in 0..grad.cols {
                let g = grad.data[i][j];
                m.data[i][j] = beta1 * m.data[i][j] + (1.0 - beta1) * g;
                v.data[i][j] = beta2 * v.data[i][j] + (1.0 - beta2) * g * g;

                let m_hat = m.data[i][j] / corr1;
                let v_hat = v.data[i][j] / corr2;
                dir.data[i][j] = m_hat / (v_hat.sqrt() + eps);
            }
        }
        dir
    }
}

impl Optimizer for Adam {
    fn step(&mut self, network: &mut Network, grads: Vec<(Matrix, Matrix)>) {
        assert_eq!(grads.len(), network.layers.len(), "one gradient pair per layer required");

        self.t += 1;
        self.beta1_pow *= self.beta1;
        self.beta2_pow *= self.beta2;
        let corr1 = 1.0 - self.beta1_pow;
        let corr2 = 1.0 - self.beta2_pow;

        for ((layer, moments), (w_grad, b_grad)) in network.layers.iter_mut()
            .zip(self.moments.iter_mut())
            .zip(grads)
        {
            let w_dir = Adam::direction(
                &w_grad, &mut moments.m_weights, &mut moments.v_weights,
                self.beta1, self.beta2, self.eps, corr1, corr2,
            );
            let b_dir = Adam::direction(
                &b_grad, &mut moments.m_biases, &mut moments.v_biases,
                self.beta1, self.beta2, self.eps, corr1, corr2,
            );

            layer.apply_gradients(w_dir, b_dir, self.learning_rate);
        }
    }
}
