use crate::error::MicrogradError;
use crate::node::{Node, NodeState};
use crate::ops::activation::{relu_backward, tanh_backward};
use crate::ops::arithmetic::{add_backward, mul_backward, pow_backward};
use crate::ops::math_elem::exp_backward;
use crate::ops::{traits::Scalar, Op};

/// Local derivative rule applied to one node during the reverse pass.
///
/// The table is closed: every operator the engine can record is a variant of
/// [`Op`], and `Op` is the only implementor.
pub(crate) trait BackwardOp<T: Scalar> {
    /// Checks that `node` has the parent count its operator requires.
    ///
    /// Runs for every node before any gradient is written, so a malformed graph
    /// aborts the pass without partial accumulation.
    fn validate(&self, node: &Node<T>) -> Result<(), MicrogradError>;

    /// Adds this node's contribution onto the gradients of its parents.
    ///
    /// `state` is a snapshot of the node's value and fully accumulated
    /// gradient. Contributions are always added, never assigned.
    fn backward(&self, node: &Node<T>, state: NodeState<T>);
}

impl<T: Scalar> BackwardOp<T> for Op {
    fn validate(&self, node: &Node<T>) -> Result<(), MicrogradError> {
        let actual = node.parents().len();
        match (self, self.expected_parents()) {
            (Op::Leaf, _) if actual > 0 => Err(MicrogradError::LeafWithParents {
                id: node.id(),
                parents: actual,
            }),
            (_, Some(expected)) if expected != actual => Err(MicrogradError::MalformedNode {
                id: node.id(),
                op: *self,
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }

    fn backward(&self, node: &Node<T>, state: NodeState<T>) {
        match self {
            Op::Leaf => {}
            Op::Add => add_backward(node, state),
            Op::Mul => mul_backward(node, state),
            Op::Pow => pow_backward(node, state),
            Op::Tanh => tanh_backward(node, state),
            Op::Relu => relu_backward(node, state),
            Op::Exp => exp_backward(node, state),
        }
    }
}
