// micrograd-core/src/ops/arithmetic/neg.rs

use crate::context::Context;
use crate::node::Node;
use crate::ops::traits::Scalar;

impl<T: Scalar> Context<T> {
    /// Records `-a` as `a * -1`.
    pub fn neg(&self, a: &Node<T>) -> Node<T> {
        let minus_one = self.constant(-T::one());
        self.mul(a, &minus_one)
    }
}
