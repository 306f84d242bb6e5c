//! # Training a Small MLP
//!
//! Fits a 3-4-4-1 tanh network to four samples with targets in {-1, 1},
//! using the sum of squared errors and plain SGD.
//!
//! ## Demonstrates
//! 1. Building an [`Mlp`] on a seeded [`Context`].
//! 2. Forward passes over a batch and [`MseLoss`].
//! 3. `backward` followed by an optimizer step, once per epoch.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use micrograd_core::nn::{Mlp, Module, MseLoss, Reduction};
use micrograd_core::optim::{Optimizer, Sgd};
use micrograd_core::{Context, MicrogradError, Node};

const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), MicrogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ctx = Context::<f64>::with_seed(42);
    let mlp = Mlp::new(&ctx, 3, &[4, 4, 1])?;
    log::info!("MLP with {} parameters", mlp.num_parameters());

    let xs: Vec<Vec<Node<f64>>> = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ]
    .iter()
    .map(|row| ctx.values(row))
    .collect();
    let ys = ctx.values(&[1.0, -1.0, -1.0, 1.0]);

    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(mlp.parameters().cloned(), LEARNING_RATE);

    let mut preds = Vec::new();
    for epoch in 0..EPOCHS {
        preds = xs
            .iter()
            .map(|x| mlp.forward(x).map(|mut out| out.remove(0)))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate(&ctx, &preds, &ys)?;

        ctx.backward(&loss)?;
        optimizer.step()?;

        if epoch % 5 == 0 || epoch == EPOCHS - 1 {
            log::info!("epoch {:>3}: loss {:.6}", epoch, loss.value());
        }
    }

    let rendered: Vec<String> = preds.iter().map(|p| format!("{:.4}", p.value())).collect();
    println!("Predictions: {}", rendered.join(", "));
    println!("Nodes recorded: {}", ctx.node_count());
    Ok(())
}
