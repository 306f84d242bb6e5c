//! # micrograd-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every arithmetic or activation call on a [`Context`] evaluates its result
//! immediately and records the produced [`Node`] together with its parents and
//! operator. [`Context::backward`] then walks the recorded DAG in reverse
//! topological order and accumulates `d(root)/d(node)` into every node that
//! contributed to the root.
//!
//! On top of the engine sit the [`nn`] building blocks (neuron, layer,
//! multilayer perceptron), a sum-of-squares loss and a plain SGD optimizer.

pub mod autograd;
pub mod context;
pub mod error;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod viz;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::Context;
pub use error::MicrogradError;
pub use node::{Node, NodeOptions};
pub use ops::traits::Scalar;
pub use ops::Op;

// Re-export traits required by public signatures
pub use num_traits;
