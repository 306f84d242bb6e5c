// micrograd-core/src/ops/arithmetic/div.rs

use crate::context::Context;
use crate::node::Node;
use crate::ops::traits::Scalar;

impl<T: Scalar> Context<T> {
    /// Records `a / b` as `a * b^-1`.
    ///
    /// A zero-valued `b` is not guarded against; the result follows IEEE-754
    /// (±Inf or NaN) through both passes.
    pub fn div(&self, a: &Node<T>, b: &Node<T>) -> Node<T> {
        let reciprocal = self.pow(b, -T::one());
        self.mul(a, &reciprocal)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
