use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use crate::optim::optimizer_trait::Optimizer;

/// Implements plain Stochastic Gradient Descent: `p -= lr * p.grad`.
#[derive(Debug)]
pub struct Sgd<T: Scalar> {
    params: Vec<Node<T>>,
    learning_rate: T,
}

impl<T: Scalar> Sgd<T> {
    /// Creates a new `Sgd` over `params`.
    ///
    /// Pass `module.parameters().cloned()` to train a whole network.
    pub fn new(params: impl IntoIterator<Item = Node<T>>, learning_rate: T) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            learning_rate,
        }
    }

    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }

    /// Changes the step size used by subsequent calls to [`Optimizer::step`],
    /// for learning-rate schedules driven by the training loop.
    pub fn set_learning_rate(&mut self, learning_rate: T) {
        self.learning_rate = learning_rate;
    }

    pub fn params(&self) -> &[Node<T>] {
        &self.params
    }
}

impl<T: Scalar> Optimizer for Sgd<T> {
    fn step(&mut self) -> Result<(), MicrogradError> {
        log::debug!(
            "SGD step: lr={}, {} parameters",
            self.learning_rate,
            self.params.len()
        );
        let step = -self.learning_rate;
        for param in &self.params {
            param.descend(step);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
