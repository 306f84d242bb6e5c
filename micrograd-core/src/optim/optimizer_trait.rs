use crate::error::MicrogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients left by the
    /// last backward pass.
    fn step(&mut self) -> Result<(), MicrogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// [`Context::backward`](crate::Context::backward) already resets every
    /// gradient it reaches, so this is only needed when gradients are
    /// accumulated by hand.
    fn zero_grad(&mut self);
}
