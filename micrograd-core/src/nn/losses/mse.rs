// micrograd-core/src/nn/losses/mse.rs

use crate::context::Context;
use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and targets.
///
/// Built entirely from recorded `sub`, `pow`, `add` and `mul` nodes, so the
/// returned loss can be passed straight to [`Context::backward`].
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Returns `Σ (prediction - target)^2`, divided by the count for
    /// [`Reduction::Mean`].
    ///
    /// An empty batch yields a zero constant under either reduction.
    pub fn calculate<T: Scalar>(
        &self,
        ctx: &Context<T>,
        predictions: &[Node<T>],
        targets: &[Node<T>],
    ) -> Result<Node<T>, MicrogradError> {
        if predictions.len() != targets.len() {
            return Err(MicrogradError::ShapeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let two = T::one() + T::one();
        let squared: Vec<Node<T>> = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, target)| ctx.pow(&ctx.sub(prediction, target), two))
            .collect();
        let total = ctx.sum(&squared);

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean if squared.is_empty() => Ok(total),
            Reduction::Mean => {
                let count = T::from_f64(squared.len() as f64);
                let scale = ctx.constant(T::one() / count);
                Ok(ctx.mul(&total, &scale))
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
