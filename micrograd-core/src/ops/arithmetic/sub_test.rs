use crate::autograd::grad_check::check_grad;
use crate::context::Context;
use crate::ops::Op;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_is_add_of_negation() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(5.0);
    let b = ctx.constant(1.5);
    let c = ctx.sub(&a, &b);

    assert_relative_eq!(c.value(), 3.5);
    assert_eq!(c.op(), Op::Add);
    assert_eq!(c.parents()[0], a);

    let negated = &c.parents()[1];
    assert_eq!(negated.op(), Op::Mul);
    assert_eq!(negated.parents()[0], b);
}

#[test]
fn test_sub_backward() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(5.0);
    let b = ctx.constant(1.5);
    let c = ctx.sub(&a, &b);
    ctx.backward(&c).unwrap();

    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_squared_error_backward() {
    let ctx = Context::<f64>::new();
    let prediction = ctx.constant(0.2);
    let target = ctx.constant(1.0);
    let diff = ctx.sub(&prediction, &target);
    let loss = ctx.pow(&diff, 2.0);
    ctx.backward(&loss).unwrap();

    assert_relative_eq!(loss.value(), 0.64, epsilon = 1e-12);
    // 2 * (prediction - target)
    assert_relative_eq!(prediction.grad(), -1.6, epsilon = 1e-12);
    assert_relative_eq!(target.grad(), 1.6, epsilon = 1e-12);
}

#[test]
fn test_sub_grad_check() {
    let result = check_grad(|ctx, x| ctx.sub(&x[0], &x[1]), &[0.5_f64, 2.0], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Sub grad check failed: {:?}", result.err());
}
