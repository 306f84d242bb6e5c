use crate::ops::{traits::Scalar, Op};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The two fields of a node that may change after construction.
///
/// `grad` is written during a backward pass, `value` during a descent step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeState<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
}

/// Internal storage for a [`Node`].
///
/// Everything except `state` is fixed at construction, so the parents and the
/// operator can be read without locking.
pub(crate) struct NodeData<T> {
    pub(crate) id: u64,
    pub(crate) op: Op,
    /// Exponent of a [`Op::Pow`] node, unused by every other operator.
    pub(crate) parameter: T,
    pub(crate) parents: Vec<Node<T>>,
    pub(crate) label: OnceLock<String>,
    pub(crate) state: RwLock<NodeState<T>>,
}

// Dropping a long chain through the default recursive drop would need one
// stack frame per node. Parents whose last handle is being released are
// unlinked onto a heap worklist instead.
impl<T> Drop for NodeData<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(node) = pending.pop() {
            if let Ok(mut data) = Arc::try_unwrap(node.data) {
                pending.append(&mut data.parents);
            }
        }
    }
}

/// A scalar value in the computation graph.
///
/// `Node` is a cheap handle (`Arc` clone) onto shared data, so a node used by
/// several consumers is the same node in every one of them. Equality and
/// hashing compare the shared allocation: within one
/// [`Context`](crate::Context) this coincides with comparing identifiers,
/// and nodes of two contexts never compare equal even when their
/// identifiers collide.
pub struct Node<T> {
    pub(crate) data: Arc<NodeData<T>>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            data: Arc::clone(&self.data),
        }
    }
}

/// Options recognised by [`Context::create`](crate::Context::create).
///
/// A plain leaf uses `NodeOptions::default()`.
#[derive(Clone)]
pub struct NodeOptions<T> {
    pub(crate) parents: Vec<Node<T>>,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
    pub(crate) parameter: T,
}

impl<T: Scalar> Default for NodeOptions<T> {
    fn default() -> Self {
        NodeOptions {
            parents: Vec::new(),
            op: Op::Leaf,
            label: None,
            parameter: T::zero(),
        }
    }
}

impl<T: Scalar> NodeOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parents(mut self, parents: Vec<Node<T>>) -> Self {
        self.parents = parents;
        self
    }

    pub fn with_op(mut self, op: Op) -> Self {
        self.op = op;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_parameter(mut self, parameter: T) -> Self {
        self.parameter = parameter;
        self
    }
}

impl<T: Scalar> Node<T> {
    pub(crate) fn from_options(id: u64, value: T, options: NodeOptions<T>) -> Self {
        let label = OnceLock::new();
        if let Some(text) = options.label {
            let _ = label.set(text);
        }
        Node {
            data: Arc::new(NodeData {
                id,
                op: options.op,
                parameter: options.parameter,
                parents: options.parents,
                label,
                state: RwLock::new(NodeState {
                    value,
                    grad: T::zero(),
                }),
            }),
        }
    }

    /// Unique, strictly increasing identifier within the owning context.
    pub fn id(&self) -> u64 {
        self.data.id
    }

    /// The result of the forward computation.
    pub fn value(&self) -> T {
        self.read_state().value
    }

    /// Accumulated `d(root)/d(self)` from the most recent backward pass.
    pub fn grad(&self) -> T {
        self.read_state().grad
    }

    /// Operands this node was computed from, in operand order.
    pub fn parents(&self) -> &[Node<T>] {
        &self.data.parents
    }

    pub fn op(&self) -> Op {
        self.data.op
    }

    /// Auxiliary scalar; only meaningful as the exponent of a `Pow` node.
    pub fn parameter(&self) -> T {
        self.data.parameter
    }

    pub fn label(&self) -> Option<&str> {
        self.data.label.get().map(String::as_str)
    }

    pub fn is_leaf(&self) -> bool {
        self.data.op == Op::Leaf
    }

    /// Attaches a diagnostic label to a freshly built node.
    ///
    /// Labels are write-once: if the node already carries one, the existing
    /// label is kept.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        if let Err(rejected) = self.data.label.set(label.into()) {
            log::warn!(
                "Node {} is already labeled {:?}; ignoring new label {:?}",
                self.data.id,
                self.label(),
                rejected
            );
        }
        self
    }

    /// Applies one gradient step in place: `value += step * grad`.
    ///
    /// Returns the updated value. The gradient is left untouched; the next
    /// backward pass resets it.
    pub fn descend(&self, step: T) -> T {
        let mut state = self.write_state();
        let grad = state.grad;
        state.value += step * grad;
        state.value
    }

    /// Resets the accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(T::zero());
    }

    pub(crate) fn set_grad(&self, grad: T) {
        self.write_state().grad = grad;
    }

    pub(crate) fn add_grad(&self, contribution: T) {
        self.write_state().grad += contribution;
    }

    /// Address of the shared data, unique among live nodes of every context.
    pub(crate) fn key(&self) -> *const NodeData<T> {
        Arc::as_ptr(&self.data)
    }

    pub(crate) fn state(&self) -> NodeState<T> {
        *self.read_state()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, NodeState<T>> {
        self.data.state.read().unwrap_or_else(|poisoned| {
            log::warn!(
                "RwLock for node {} was poisoned. Recovering read guard.",
                self.data.id
            );
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, NodeState<T>> {
        self.data.state.write().unwrap_or_else(|poisoned| {
            log::warn!(
                "RwLock for node {} was poisoned. Recovering write guard.",
                self.data.id
            );
            poisoned.into_inner()
        })
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<T> Eq for Node<T> {}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.data).hash(state);
    }
}

impl<T: Scalar> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(data={})", self.value())
    }
}

impl<T: Scalar> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        let parent_ids: Vec<u64> = self.parents().iter().map(Node::id).collect();
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("label", &self.label())
            .field("op", &self.op())
            .field("value", &state.value)
            .field("grad", &state.grad)
            .field("parents", &parent_ids)
            .finish()
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
