use crate::context::Context;
use crate::error::MicrogradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::Module;
use crate::node::Node;
use crate::ops::traits::Scalar;

/// A single unit: `activation(bias + Σ inputs[i] * weights[i])`.
///
/// Weights start as N(0, 1) draws from the context's generator and the bias
/// starts at 0. All of them are leaves owned by the neuron.
#[derive(Debug)]
pub struct Neuron<T: Scalar> {
    ctx: Context<T>,
    weights: Vec<Node<T>>,
    bias: Node<T>,
    activation: Activation,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron taking `nin` inputs, with the default activation.
    pub fn new(ctx: &Context<T>, nin: usize) -> Self {
        let bias = init::zeros(ctx, "b");
        let weights = (0..nin)
            .map(|i| init::randn(ctx, format!("w{}", i)))
            .collect();
        Neuron {
            ctx: ctx.clone(),
            weights,
            bias,
            activation: Activation::default(),
        }
    }

    /// Creates a neuron with explicit starting values.
    pub fn from_values(ctx: &Context<T>, weights: &[T], bias: T, activation: Activation) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| ctx.leaf(w, format!("w{}", i)))
            .collect();
        Neuron {
            ctx: ctx.clone(),
            weights,
            bias: ctx.leaf(bias, "b"),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Node<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Node<T> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    type Output = Node<T>;

    fn forward(&self, inputs: &[Node<T>]) -> Result<Node<T>, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let ctx = &self.ctx;
        let act = inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias.clone(), |acc, (x, w)| ctx.add(&acc, &ctx.mul(x, w)));
        let out = self.activation.apply(ctx, &act);
        // A linear neuron without inputs hands back its own bias.
        if out.label().is_some() {
            return Ok(out);
        }
        Ok(out.labeled("out"))
    }

    fn parameters(&self) -> Box<dyn Iterator<Item = &Node<T>> + '_> {
        Box::new(std::iter::once(&self.bias).chain(self.weights.iter()))
    }

    fn named_parameters(&self) -> Vec<(String, &Node<T>)> {
        std::iter::once(("bias".to_string(), &self.bias))
            .chain(
                self.weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| (format!("weights.{}", i), w)),
            )
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
