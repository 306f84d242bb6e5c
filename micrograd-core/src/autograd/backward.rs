use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::context::Context;
use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use std::sync::Arc;

impl<T: Scalar> Context<T> {
    /// Computes `d(root)/d(node)` for every node reachable from `root`.
    ///
    /// The pass zeroes every reachable gradient, seeds `root` with 1 and then
    /// applies each operator's local rule from the root towards the leaves,
    /// adding onto the parents' gradients. Calling it again on an unchanged
    /// graph yields the same gradients.
    ///
    /// The topological order is cached on the context and reused while the
    /// same root is passed again. A fresh root (the usual case after a new
    /// forward pass) recomputes it.
    ///
    /// # Errors
    ///
    /// [`MicrogradError::LeafWithParents`] or [`MicrogradError::MalformedNode`]
    /// when the graph was built inconsistently through
    /// [`Context::create`]. Both are detected before any gradient changes.
    /// They indicate a construction bug and must not be retried.
    pub fn backward(&self, root: &Node<T>) -> Result<(), MicrogradError> {
        let mut order = self.lock_topo_sorted();

        let cached = order
            .first()
            .is_some_and(|first| Arc::ptr_eq(&first.data, &root.data));
        if cached {
            log::debug!(
                "Reusing cached topological order for node {} ({} nodes)",
                root.id(),
                order.len()
            );
        } else {
            *order = topological_sort(root)?;
            log::debug!(
                "Computed topological order for node {} ({} nodes)",
                root.id(),
                order.len()
            );
        }

        for node in order.iter() {
            node.zero_grad();
        }
        root.set_grad(T::one());

        for node in order.iter() {
            let state = node.state();
            node.op().backward(node, state);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
