//! Reverse-mode differentiation over the recorded graph.
//!
//! [`graph`] orders the nodes reachable from a root, [`backward_op`] maps each
//! operator to its local derivative rule, and [`backward`] drives the pass on
//! a [`Context`](crate::Context). [`grad_check`] compares the analytical
//! gradients against central finite differences.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub(crate) use backward_op::BackwardOp;
