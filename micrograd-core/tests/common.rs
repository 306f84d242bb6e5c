use micrograd_core::{Context, Node};

// Route `log` output through the test harness when RUST_LOG is set.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four-sample regression set: inputs and targets in {-1, 1}.
#[allow(dead_code)]
pub fn tiny_dataset(ctx: &Context<f64>) -> (Vec<Vec<Node<f64>>>, Vec<Node<f64>>) {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ]
    .iter()
    .map(|row| ctx.values(row))
    .collect();
    let ys = ctx.values(&[1.0, -1.0, -1.0, 1.0]);
    (xs, ys)
}

/// Leaves and output of `o = tanh(x1*w1 + x2*w2 + b)`.
#[allow(dead_code)]
pub struct Perceptron {
    pub x1: Node<f64>,
    pub x2: Node<f64>,
    pub w1: Node<f64>,
    pub w2: Node<f64>,
    pub x1w1: Node<f64>,
    pub x2w2: Node<f64>,
    pub n: Node<f64>,
}

#[allow(dead_code)]
pub fn perceptron_inputs(ctx: &Context<f64>) -> Perceptron {
    let x1 = ctx.leaf(2.0, "x1");
    let x2 = ctx.leaf(0.0, "x2");
    let w1 = ctx.leaf(-3.0, "w1");
    let w2 = ctx.leaf(1.0, "w2");
    let b = ctx.leaf(6.881_373_587_019_543, "b");
    let x1w1 = ctx.mul(&x1, &w1).labeled("x1*w1");
    let x2w2 = ctx.mul(&x2, &w2).labeled("x2*w2");
    let sum = ctx.add(&x1w1, &x2w2).labeled("x1*w1 + x2*w2");
    let n = ctx.add(&sum, &b).labeled("n");
    Perceptron {
        x1,
        x2,
        w1,
        w2,
        x1w1,
        x2w2,
        n,
    }
}
