//! # Tanh Perceptron Graph
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)` with tanh expanded into exponentials,
//! runs a backward pass and writes the annotated graph as Graphviz DOT.
//!
//! ## Running
//! `cargo run --example perceptron_graph -- out/graph.gv`
//!
//! Render with `dot -Tsvg out/graph.gv -o graph.svg`.

use micrograd_core::{viz, Context, MicrogradError};
use std::path::PathBuf;

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("graph.gv"));

    let ctx = Context::<f64>::new();

    let x1 = ctx.leaf(2.0, "x1");
    let x2 = ctx.leaf(0.0, "x2");
    let w1 = ctx.leaf(-3.0, "w1");
    let w2 = ctx.leaf(1.0, "w2");
    let b = ctx.leaf(6.881_373_587_019_543, "b");

    let x1w1 = ctx.mul(&x1, &w1).labeled("x1*w1");
    let x2w2 = ctx.mul(&x2, &w2).labeled("x2*w2");
    let x1w1x2w2 = ctx.add(&x1w1, &x2w2).labeled("x1*w1 + x2*w2");
    let n = ctx.add(&x1w1x2w2, &b).labeled("n");

    let two_n = ctx.mul(&n, &ctx.constant(2.0)).labeled("2n");
    let e = ctx.exp(&two_n).labeled("e^2n");
    let numerator = ctx.add(&e, &ctx.constant(-1.0)).labeled("e-1");
    let denominator = ctx.add(&e, &ctx.constant(1.0)).labeled("e+1");
    let o = ctx.div(&numerator, &denominator).labeled("o");

    ctx.backward(&o)?;

    println!("o = {}", o);
    for leaf in [&x1, &x2, &w1, &w2, &b] {
        println!(
            "d(o)/d({}) = {:.4}",
            leaf.label().unwrap_or("?"),
            leaf.grad()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| MicrogradError::GraphRender {
            path: parent.display().to_string(),
            source,
        })?;
    }
    viz::render(&path, &o)?;
    println!("Graph written to {}", path.display());

    Ok(())
}
