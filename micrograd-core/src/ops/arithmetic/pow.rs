// micrograd-core/src/ops/arithmetic/pow.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Records `base^exponent`.
    ///
    /// The exponent is a plain scalar kept in the node's `parameter`; only the
    /// base is differentiated.
    pub fn pow(&self, base: &Node<T>, exponent: T) -> Node<T> {
        let value = base.value().powf(exponent);
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![base.clone()])
                .with_op(Op::Pow)
                .with_parameter(exponent),
        )
    }
}

// --- Backward Operation ---

/// d(a^n)/da = n * a^(n-1).
pub(crate) fn pow_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    let base = &output.parents()[0];
    let n = output.parameter();
    let local = n * base.value().powf(n - T::one());
    base.add_grad(out.grad * local);
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
