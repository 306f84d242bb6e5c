// micrograd-core/src/ops/activation/tanh.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Applies the hyperbolic tangent.
    pub fn tanh(&self, a: &Node<T>) -> Node<T> {
        let value = a.value().tanh();
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![a.clone()])
                .with_op(Op::Tanh),
        )
    }
}

// --- Backward Operation ---

/// d(tanh a)/da = 1 - tanh(a)^2, computed from the stored output value.
pub(crate) fn tanh_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    let local = T::one() - out.value * out.value;
    output.parents()[0].add_grad(out.grad * local);
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
