// micrograd-core/src/ops/math_elem/exp.rs

use crate::context::Context;
use crate::node::{Node, NodeOptions, NodeState};
use crate::ops::{traits::Scalar, Op};

// --- Forward Operation ---

impl<T: Scalar> Context<T> {
    /// Computes `e^a`.
    pub fn exp(&self, a: &Node<T>) -> Node<T> {
        let value = a.value().exp();
        self.create(
            value,
            NodeOptions::default()
                .with_parents(vec![a.clone()])
                .with_op(Op::Exp),
        )
    }
}

// --- Backward Operation ---

/// d(e^a)/da = e^a, which is the node's own value.
pub(crate) fn exp_backward<T: Scalar>(output: &Node<T>, out: NodeState<T>) {
    output.parents()[0].add_grad(out.grad * out.value);
}

#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::context::Context;
    use crate::ops::Op;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_backward() {
        let ctx = Context::<f64>::new();
        let a = ctx.constant(1.0);
        let o = ctx.exp(&a);
        ctx.backward(&o).unwrap();

        assert_eq!(o.op(), Op::Exp);
        assert_relative_eq!(o.value(), std::f64::consts::E);
        assert_relative_eq!(a.grad(), std::f64::consts::E);
    }

    #[test]
    fn test_exp_overflow_is_not_guarded() {
        let ctx = Context::<f64>::new();
        let a = ctx.constant(1000.0);
        let o = ctx.exp(&a);

        assert!(o.value().is_infinite());
    }

    #[test]
    fn test_exp_grad_check() {
        let result = check_grad(|ctx, x| ctx.exp(&x[0]), &[-0.3_f64], 1e-6, 1e-7, 1e-5);
        assert!(result.is_ok(), "Exp grad check failed: {:?}", result.err());
    }
}
