// micrograd-core/src/ops/arithmetic/sub.rs

use crate::context::Context;
use crate::node::Node;
use crate::ops::traits::Scalar;

impl<T: Scalar> Context<T> {
    /// Records `a - b` as `a + (b * -1)`.
    pub fn sub(&self, a: &Node<T>, b: &Node<T>) -> Node<T> {
        let negated = self.neg(b);
        self.add(a, &negated)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
