//! Forward operations and their local derivative rules.
//!
//! Each operation lives in its own file and contributes two things: a method
//! on [`Context`](crate::Context) that evaluates the forward value and records
//! the resulting node, and the backward rule that `autograd::backward_op`
//! dispatches to during the reverse pass.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

use std::fmt;

/// Tag identifying the forward function that produced a node.
///
/// Divide and subtract have no tag of their own: they are built from
/// [`Op::Mul`], [`Op::Pow`] and [`Op::Add`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    /// Input, constant or trainable parameter. Never has parents.
    #[default]
    Leaf,
    Add,
    Mul,
    /// `base^n`, the exponent `n` is kept in the node's `parameter`.
    Pow,
    Tanh,
    Relu,
    Exp,
}

impl Op {
    /// The short symbol used when printing or rendering a graph.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "pow",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
            Op::Exp => "exp",
        }
    }

    /// Number of parents a node with this operator must have.
    ///
    /// `None` means any count: add sums over however many parents it was given.
    pub fn expected_parents(self) -> Option<usize> {
        match self {
            Op::Leaf => Some(0),
            Op::Add => None,
            Op::Mul => Some(2),
            Op::Pow | Op::Tanh | Op::Relu | Op::Exp => Some(1),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_op_is_leaf() {
        assert_eq!(Op::default(), Op::Leaf);
    }

    #[test]
    fn test_op_display() {
        assert_eq!(Op::Add.to_string(), "+");
        assert_eq!(Op::Mul.to_string(), "*");
        assert_eq!(Op::Pow.to_string(), "pow");
        assert_eq!(Op::Tanh.to_string(), "tanh");
        assert_eq!(Op::Relu.to_string(), "relu");
        assert_eq!(Op::Exp.to_string(), "exp");
        assert_eq!(Op::Leaf.to_string(), "");
    }

    #[test]
    fn test_expected_parents() {
        assert_eq!(Op::Leaf.expected_parents(), Some(0));
        assert_eq!(Op::Add.expected_parents(), None);
        assert_eq!(Op::Mul.expected_parents(), Some(2));
        assert_eq!(Op::Exp.expected_parents(), Some(1));
    }
}
