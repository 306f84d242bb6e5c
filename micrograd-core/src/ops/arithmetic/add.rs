// micrograd-core/src/ops/arithmetic/add.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Records `a + b`.
    pub fn add(&self, a: &Node<T>, b: &Node<T>) -> Node<T> {
        let value = a.value() + b.value();
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![a.clone(), b.clone()])
                .with_op(Op::Add),
        )
    }

    /// Adds `nodes` left to right onto a constant zero.
    ///
    /// An empty slice yields the zero constant itself.
    pub fn sum(&self, nodes: &[Node<T>]) -> Node<T> {
        nodes
            .iter()
            .fold(self.constant(T::zero()), |acc, node| self.add(&acc, node))
    }
}

// --- Backward Operation ---

/// d(a+b)/da = d(a+b)/db = 1, for however many operands the node has.
pub(crate) fn add_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    for parent in output.parents() {
        parent.add_grad(out.grad);
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
