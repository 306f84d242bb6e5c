use crate::context::Context;
use crate::error::MicrogradError;
use crate::nn::activation::Activation;
use crate::nn::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::node::Node;
use crate::ops::traits::Scalar;

/// A multilayer perceptron: layers applied in order, each feeding the next.
#[derive(Debug)]
pub struct Mlp<T: Scalar> {
    layers: Vec<Layer<T>>,
}

impl<T: Scalar> Mlp<T> {
    /// Creates a network taking `nin` inputs, with one layer per entry of
    /// `nouts` giving that layer's width.
    ///
    /// Every neuron starts with the default activation; use
    /// [`Mlp::set_activation`] to change a layer.
    ///
    /// # Errors
    /// [`MicrogradError::EmptyNetwork`] if `nouts` is empty.
    pub fn new(ctx: &Context<T>, nin: usize, nouts: &[usize]) -> Result<Self, MicrogradError> {
        if nouts.is_empty() {
            return Err(MicrogradError::EmptyNetwork);
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        log::debug!("Building MLP with layer sizes {:?}", sizes);

        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(ctx, pair[0], pair[1]))
            .collect();
        Ok(Mlp { layers })
    }

    /// Chains existing layers.
    ///
    /// # Errors
    /// [`MicrogradError::EmptyNetwork`] for no layers, and
    /// [`MicrogradError::ArityMismatch`] when a layer's input arity differs
    /// from the previous layer's width.
    pub fn from_layers(layers: Vec<Layer<T>>) -> Result<Self, MicrogradError> {
        if layers.is_empty() {
            return Err(MicrogradError::EmptyNetwork);
        }
        for (index, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(MicrogradError::ArityMismatch {
                    layer: index + 1,
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    /// Sets the activation of every neuron in layer `layer`.
    pub fn set_activation(&mut self, layer: usize, activation: Activation) -> Result<(), MicrogradError> {
        let depth = self.layers.len();
        let target = self
            .layers
            .get_mut(layer)
            .ok_or(MicrogradError::LayerIndexOutOfRange { index: layer, depth })?;
        target.set_activation(activation);
        Ok(())
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers[0].nin()
    }

    pub fn nout(&self) -> usize {
        self.layers[self.layers.len() - 1].nout()
    }
}

impl<T: Scalar> Module<T> for Mlp<T> {
    type Output = Vec<Node<T>>;

    fn forward(&self, inputs: &[Node<T>]) -> Result<Vec<Node<T>>, MicrogradError> {
        let (first, rest) = self
            .layers
            .split_first()
            .ok_or(MicrogradError::EmptyNetwork)?;
        rest.iter()
            .try_fold(first.forward(inputs)?, |out, layer| layer.forward(&out))
    }

    fn parameters(&self) -> Box<dyn Iterator<Item = &Node<T>> + '_> {
        Box::new(self.layers.iter().flat_map(|l| l.parameters()))
    }

    fn named_parameters(&self) -> Vec<(String, &Node<T>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
