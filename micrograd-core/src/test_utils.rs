// Shared fixtures for unit tests.

use crate::context::Context;
use crate::node::Node;

/// Builds `(a*b) * (a+b)`: both leaves reach the root through two paths.
pub(crate) fn diamond(ctx: &Context<f64>, a: f64, b: f64) -> (Node<f64>, Node<f64>, Node<f64>) {
    let a = ctx.leaf(a, "a");
    let b = ctx.leaf(b, "b");
    let prod = ctx.mul(&a, &b).labeled("d");
    let total = ctx.add(&a, &b).labeled("e");
    let root = ctx.mul(&prod, &total).labeled("f");
    (a, b, root)
}

/// Nodes of the two-input tanh neuron `o = tanh(x1*w1 + x2*w2 + b)`.
pub(crate) struct Perceptron {
    pub x1: Node<f64>,
    pub x2: Node<f64>,
    pub w1: Node<f64>,
    pub w2: Node<f64>,
    pub b: Node<f64>,
    pub x1w1: Node<f64>,
    pub x2w2: Node<f64>,
    pub n: Node<f64>,
    pub o: Node<f64>,
}

/// The neuron with `x1=2, x2=0, w1=-3, w2=1`, biased so that `n ≈ 0.8814`
/// and `o ≈ 0.7071`.
pub(crate) fn perceptron(ctx: &Context<f64>) -> Perceptron {
    let x1 = ctx.leaf(2.0, "x1");
    let x2 = ctx.leaf(0.0, "x2");
    let w1 = ctx.leaf(-3.0, "w1");
    let w2 = ctx.leaf(1.0, "w2");
    let b = ctx.leaf(6.881_373_587_019_543, "b");
    let x1w1 = ctx.mul(&x1, &w1).labeled("x1*w1");
    let x2w2 = ctx.mul(&x2, &w2).labeled("x2*w2");
    let sum = ctx.add(&x1w1, &x2w2).labeled("x1*w1 + x2*w2");
    let n = ctx.add(&sum, &b).labeled("n");
    let o = ctx.tanh(&n).labeled("o");
    Perceptron {
        x1,
        x2,
        w1,
        w2,
        b,
        x1w1,
        x2w2,
        n,
        o,
    }
}
