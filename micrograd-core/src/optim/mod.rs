// micrograd-core/src/optim/mod.rs

//! Optimizers for training networks.
//!
//! An optimizer holds handles to the parameter nodes it updates. Handles are
//! shared with the network, so a step is visible to the next forward pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
