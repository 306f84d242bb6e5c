use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use std::fmt::Debug;

/// The base trait for all network building blocks (neurons, layers, networks).
pub trait Module<T: Scalar>: Debug {
    /// What one forward pass produces: a single node for a neuron, one node
    /// per neuron for a layer or a network.
    type Output;

    /// Records the forward computation for `inputs` on the module's context.
    ///
    /// # Errors
    /// Returns [`MicrogradError::ShapeMismatch`] if `inputs` does not have the
    /// module's input arity.
    fn forward(&self, inputs: &[Node<T>]) -> Result<Self::Output, MicrogradError>;

    /// Iterates over every trainable node, lazily.
    ///
    /// The order is fixed: bias before weights within a neuron, neurons in
    /// index order, layers in index order. Every call starts a fresh pass
    /// over the same nodes.
    fn parameters(&self) -> Box<dyn Iterator<Item = &Node<T>> + '_>;

    /// Every trainable node with a hierarchical name such as
    /// `layers.0.neurons.1.weights.2`, in [`Module::parameters`] order.
    fn named_parameters(&self) -> Vec<(String, &Node<T>)>;

    fn num_parameters(&self) -> usize {
        self.parameters().count()
    }
}

/// Prepends `prefix.` to each name of a child's named parameters.
pub(crate) fn prefixed<'a, T>(
    prefix: String,
    children: Vec<(String, &'a Node<T>)>,
) -> impl Iterator<Item = (String, &'a Node<T>)> {
    children
        .into_iter()
        .map(move |(name, node)| (format!("{}.{}", prefix, name), node))
}
