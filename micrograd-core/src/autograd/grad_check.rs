use crate::context::Context;
use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(#[from] MicrogradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`,
/// on the context it is handed. The analytical gradient of every input comes
/// from one [`Context::backward`] pass; the numerical one is
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`, each side evaluated on a fresh
/// context. The two agree when they are within `abs_tol` or within `rel_tol`
/// of each other.
///
/// Differences are computed in `f64` whatever `T` is.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&Context<T>, &[Node<T>]) -> Node<T>,
{
    // --- 1. Analytical gradients ---
    let ctx = Context::new();
    let leaves = ctx.values(inputs);
    let output = func(&ctx, &leaves);
    ctx.backward(&output)?;
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad().as_f64()).collect();

    // --- 2. Numerical gradients, one input at a time ---
    let evaluate = |index: usize, delta: f64| -> f64 {
        let ctx = Context::new();
        let perturbed: Vec<T> = inputs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                if i == index {
                    T::from_f64(x.as_f64() + delta)
                } else {
                    x
                }
            })
            .collect();
        let leaves = ctx.values(&perturbed);
        func(&ctx, &leaves).value().as_f64()
    };

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(input_index, epsilon);
        let loss_minus = evaluate(input_index, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "Input {}: analytical {:.6e}, numerical {:.6e}",
            input_index,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}
