// micrograd-core/src/ops/arithmetic/mul.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Records `a * b`.
    pub fn mul(&self, a: &Node<T>, b: &Node<T>) -> Node<T> {
        let value = a.value() * b.value();
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![a.clone(), b.clone()])
                .with_op(Op::Mul),
        )
    }
}

// --- Backward Operation ---

/// d(a*b)/da = b, d(a*b)/db = a.
pub(crate) fn mul_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    let a = &output.parents()[0];
    let b = &output.parents()[1];
    // Read both operands before writing: `a` and `b` may be the same node.
    let (a_value, b_value) = (a.value(), b.value());

    a.add_grad(out.grad * b_value);
    b.add_grad(out.grad * a_value);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
