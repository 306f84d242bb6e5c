// micrograd-core/src/nn/mod.rs
// Trainable building blocks over the scalar engine.

pub mod activation;
pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use activation::Activation;
pub use layer::Layer;
pub use losses::{MseLoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
