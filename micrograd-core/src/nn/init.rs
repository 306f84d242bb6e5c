// micrograd-core/src/nn/init.rs
// Parameter initializers. Each returns a fresh labeled leaf.

use crate::context::Context;
use crate::node::Node;
use crate::ops::traits::Scalar;

/// A leaf drawn from N(0, 1) using the context's generator.
pub fn randn<T: Scalar>(ctx: &Context<T>, label: impl Into<String>) -> Node<T> {
    let value = ctx.sample_standard_normal();
    ctx.leaf(value, label)
}

/// A leaf holding 0.
pub fn zeros<T: Scalar>(ctx: &Context<T>, label: impl Into<String>) -> Node<T> {
    ctx.leaf(T::zero(), label)
}
