use crate::context::Context;
use crate::node::NodeOptions;
use crate::ops::Op;
use std::collections::HashSet;

#[test]
fn test_leaf_defaults() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(1.5);

    assert_eq!(a.value(), 1.5);
    assert_eq!(a.grad(), 0.0);
    assert!(a.parents().is_empty());
    assert_eq!(a.op(), Op::Leaf);
    assert!(a.is_leaf());
    assert_eq!(a.label(), None);
    assert_eq!(a.parameter(), 0.0);
}

#[test]
fn test_create_with_options() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(2.0);
    let c = ctx.create(
        8.0,
        NodeOptions::new()
            .with_parents(vec![a.clone()])
            .with_op(Op::Pow)
            .with_parameter(3.0)
            .with_label("cube"),
    );

    assert_eq!(c.value(), 8.0);
    assert_eq!(c.parents(), &[a]);
    assert_eq!(c.op(), Op::Pow);
    assert_eq!(c.parameter(), 3.0);
    assert_eq!(c.label(), Some("cube"));
    assert!(!c.is_leaf());
}

#[test]
fn test_labeled_is_set_once() {
    let ctx = Context::<f64>::new();
    let a = ctx.leaf(1.0, "first");
    let a = a.labeled("second");
    assert_eq!(a.label(), Some("first"));

    let b = ctx.constant(1.0).labeled("b");
    assert_eq!(b.label(), Some("b"));
}

#[test]
fn test_label_visible_through_clones() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(1.0);
    let alias = a.clone();
    let _ = a.labeled("shared");

    assert_eq!(alias.label(), Some("shared"));
}

#[test]
fn test_descend() {
    let ctx = Context::<f64>::new();
    let w = ctx.constant(1.0);
    let y = ctx.mul(&w, &w);
    ctx.backward(&y).unwrap();

    let updated = w.descend(-0.1);
    assert!((updated - 0.8).abs() < 1e-12);
    assert_eq!(w.value(), updated);
    // descend leaves the gradient in place
    assert_eq!(w.grad(), 2.0);
}

#[test]
fn test_zero_grad() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(1.0);
    a.add_grad(3.0);
    a.zero_grad();

    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_identity_is_the_id() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(1.0);
    let b = ctx.constant(1.0);
    let a_clone = a.clone();

    assert_ne!(a, b);
    assert_eq!(a, a_clone);

    let set: HashSet<_> = [a.clone(), b.clone(), a_clone].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_display() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(2.5);

    assert_eq!(a.to_string(), "Node(data=2.5)");
}

#[test]
fn test_debug_lists_parent_ids() {
    let ctx = Context::<f64>::new();
    let a = ctx.constant(1.0);
    let b = ctx.constant(2.0);
    let c = ctx.add(&a, &b);
    let debug = format!("{:?}", c);

    assert!(debug.contains("op: Add"));
    assert!(debug.contains(&format!("parents: [{}, {}]", a.id(), b.id())));
}

#[test]
fn test_dropping_a_long_chain() {
    let ctx = Context::<f64>::new();
    let step = ctx.constant(0.5);
    let mut acc = ctx.constant(0.0);
    for _ in 0..200_000 {
        acc = ctx.add(&acc, &step);
    }
    assert_eq!(acc.value(), 100_000.0);
    drop(acc);
    assert_eq!(step.value(), 0.5);
}

#[test]
fn test_descend_f32() {
    let ctx = Context::<f32>::new();
    let w = ctx.constant(2.0_f32);
    let y = ctx.mul(&w, &ctx.constant(3.0));
    ctx.backward(&y).unwrap();

    assert_eq!(w.descend(-0.5), 0.5);
    assert_eq!(w.grad(), 3.0);
}

#[test]
fn test_nodes_of_different_contexts_are_distinct() {
    let first = Context::<f64>::new();
    let second = Context::<f64>::new();
    let a = first.constant(1.0);
    let b = second.constant(1.0);

    assert_eq!(a.id(), b.id());
    assert_ne!(a, b);
    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 2);
}
