// micrograd-core/src/ops/activation/relu.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Applies the Rectified Linear Unit: `max(a, 0)`.
    pub fn relu(&self, a: &Node<T>) -> Node<T> {
        let input = a.value();
        let value = if input > T::zero() { input } else { T::zero() };
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![a.clone()])
                .with_op(Op::Relu),
        )
    }
}

// --- Backward Operation ---

/// Passes the gradient through only where the output was strictly positive.
pub(crate) fn relu_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    if out.value > T::zero() {
        output.parents()[0].add_grad(out.grad);
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
