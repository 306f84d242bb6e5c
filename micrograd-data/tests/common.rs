use micrograd_core::nn::{Activation, Mlp, Module};
use micrograd_core::{Context, MicrogradError, Node};

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A ReLU network with a linear output unit, as used for max-margin
/// classification.
#[allow(dead_code)]
pub fn relu_classifier(ctx: &Context<f64>, hidden: &[usize]) -> Result<Mlp<f64>, MicrogradError> {
    let sizes: Vec<usize> = hidden.iter().copied().chain(std::iter::once(1)).collect();
    let mut mlp = Mlp::new(ctx, 2, &sizes)?;
    for layer in 0..hidden.len() {
        mlp.set_activation(layer, Activation::Relu)?;
    }
    mlp.set_activation(hidden.len(), Activation::Linear)?;
    Ok(mlp)
}

/// Mean hinge loss `relu(1 - y * score)` plus `alpha * Σ p²`, and accuracy.
#[allow(dead_code)]
pub fn max_margin_loss(
    ctx: &Context<f64>,
    mlp: &Mlp<f64>,
    inputs: &[Vec<Node<f64>>],
    targets: &[f64],
    alpha: f64,
) -> Result<(Node<f64>, f64), MicrogradError> {
    let mut margins = Vec::with_capacity(inputs.len());
    let mut correct = 0;
    for (x, &y) in inputs.iter().zip(targets) {
        let score = mlp.forward(x)?.remove(0);
        if (score.value() > 0.0) == (y > 0.0) {
            correct += 1;
        }
        let scaled = ctx.mul(&score, &ctx.constant(-y));
        margins.push(ctx.relu(&ctx.add(&ctx.constant(1.0), &scaled)));
    }
    let n = ctx.constant(1.0 / inputs.len() as f64);
    let data_loss = ctx.mul(&ctx.sum(&margins), &n);

    let squares: Vec<Node<f64>> = mlp.parameters().map(|p| ctx.mul(p, p)).collect();
    let reg_loss = ctx.mul(&ctx.sum(&squares), &ctx.constant(alpha));

    let accuracy = correct as f64 / inputs.len() as f64;
    Ok((ctx.add(&data_loss, &reg_loss), accuracy))
}
