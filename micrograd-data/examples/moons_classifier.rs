//! # Half-Moons Classifier
//!
//! Trains a 2-16-16-1 ReLU network with a max-margin (hinge) loss and L2
//! regularization on the two-interleaving-half-moons dataset. The learning
//! rate decays linearly over the epochs.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example moons_classifier`

use micrograd_core::nn::{Activation, Mlp, Module};
use micrograd_core::optim::{Optimizer, Sgd};
use micrograd_core::{Context, MicrogradError, Node};
use micrograd_data::make_moons;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 100;
const NOISE: f64 = 0.1;
const EPOCHS: usize = 100;
const ALPHA: f64 = 1e-4;

fn main() -> Result<(), MicrogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(1337);
    let moons = make_moons(SAMPLES, NOISE, true, &mut rng)?;

    let ctx = Context::<f64>::with_seed(1337);
    let mut mlp = Mlp::new(&ctx, 2, &[16, 16, 1])?;
    mlp.set_activation(0, Activation::Relu)?;
    mlp.set_activation(1, Activation::Relu)?;
    mlp.set_activation(2, Activation::Linear)?;
    log::info!("MLP with {} parameters", mlp.num_parameters());

    let inputs = moons.inputs(&ctx);
    let targets = moons.signed_labels();
    let mut optimizer = Sgd::new(mlp.parameters().cloned(), 1.0);

    for epoch in 0..EPOCHS {
        let (loss, accuracy) = max_margin_loss(&ctx, &mlp, &inputs, &targets)?;
        ctx.backward(&loss)?;

        optimizer.set_learning_rate(1.0 - 0.9 * epoch as f64 / EPOCHS as f64);
        optimizer.step()?;

        log::info!(
            "epoch {:>3}: loss {:.6}, accuracy {:.1}%",
            epoch,
            loss.value(),
            accuracy * 100.0
        );
    }

    Ok(())
}

fn max_margin_loss(
    ctx: &Context<f64>,
    mlp: &Mlp<f64>,
    inputs: &[Vec<Node<f64>>],
    targets: &[f64],
) -> Result<(Node<f64>, f64), MicrogradError> {
    let mut margins = Vec::with_capacity(inputs.len());
    let mut correct = 0;
    for (x, &y) in inputs.iter().zip(targets) {
        let score = mlp.forward(x)?.remove(0);
        if (score.value() > 0.0) == (y > 0.0) {
            correct += 1;
        }
        // relu(1 - y * score)
        let scaled = ctx.mul(&score, &ctx.constant(-y));
        margins.push(ctx.relu(&ctx.add(&ctx.constant(1.0), &scaled)));
    }
    let data_loss = ctx.mul(&ctx.sum(&margins), &ctx.constant(1.0 / inputs.len() as f64));

    let squares: Vec<Node<f64>> = mlp.parameters().map(|p| ctx.mul(p, p)).collect();
    let reg_loss = ctx.mul(&ctx.sum(&squares), &ctx.constant(ALPHA));

    let accuracy = correct as f64 / inputs.len() as f64;
    Ok((ctx.add(&data_loss, &reg_loss), accuracy))
}
