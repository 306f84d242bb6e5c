use crate::context::Context;
use crate::error::MicrogradError;
use crate::nn::activation::Activation;
use crate::nn::module::{prefixed, Module};
use crate::nn::neuron::Neuron;
use crate::node::Node;
use crate::ops::traits::Scalar;

/// A row of neurons fed the same input vector.
#[derive(Debug)]
pub struct Layer<T: Scalar> {
    neurons: Vec<Neuron<T>>,
    nin: usize,
}

impl<T: Scalar> Layer<T> {
    /// Creates `nout` freshly initialized neurons of `nin` inputs each.
    pub fn new(ctx: &Context<T>, nin: usize, nout: usize) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::new(ctx, nin)).collect(),
            nin,
        }
    }

    /// Builds a layer from existing neurons, which must all take `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron<T>>) -> Result<Self, MicrogradError> {
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(MicrogradError::ShapeMismatch {
                expected: nin,
                actual: odd.nin(),
                operation: "Layer from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Number of neurons, which is also the output width.
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    pub fn set_activation(&mut self, activation: Activation) {
        for neuron in &mut self.neurons {
            neuron.set_activation(activation);
        }
    }
}

impl<T: Scalar> Module<T> for Layer<T> {
    type Output = Vec<Node<T>>;

    fn forward(&self, inputs: &[Node<T>]) -> Result<Vec<Node<T>>, MicrogradError> {
        if inputs.len() != self.nin {
            return Err(MicrogradError::ShapeMismatch {
                expected: self.nin,
                actual: inputs.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Box<dyn Iterator<Item = &Node<T>> + '_> {
        Box::new(self.neurons.iter().flat_map(|n| n.parameters()))
    }

    fn named_parameters(&self) -> Vec<(String, &Node<T>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}
