use crate::autograd::BackwardOp;
use crate::context::Context;
use crate::error::MicrogradError;
use crate::node::{Node, NodeData};
use crate::ops::traits::Scalar;
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes after all
/// of its consumers. `root` is first, leaves come last.
///
/// This is the reversed post-order of a depth-first traversal. The traversal
/// keeps an explicit stack, so deep chains (long training expressions) do not
/// exhaust the thread stack. Nodes reached through several paths are visited
/// once. The visited set is keyed on the node allocation rather than the
/// identifier, since operands recorded on different contexts may share one.
///
/// Every node is validated against its operator while it is discovered, so a
/// malformed graph is reported before the caller touches any gradient.
pub(crate) fn topological_sort<T: Scalar>(root: &Node<T>) -> Result<Vec<Node<T>>, MicrogradError> {
    let mut visited: HashSet<*const NodeData<T>> = HashSet::new();
    let mut sorted: Vec<Node<T>> = Vec::new();
    // (node, parents already pushed)
    let mut stack: Vec<(Node<T>, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.key()) {
            continue;
        }
        node.op().validate(&node)?;

        let parents: Vec<Node<T>> = node
            .parents()
            .iter()
            .filter(|parent| !visited.contains(&parent.key()))
            .cloned()
            .collect();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for parent in parents.into_iter().rev() {
            stack.push((parent, false));
        }
    }

    sorted.reverse();
    log::trace!("Topological sort from node {} visited {} nodes", root.id(), sorted.len());
    Ok(sorted)
}

impl<T: Scalar> Context<T> {
    /// Returns the nodes reachable from `root`, root first, each node after
    /// every node that consumes it.
    ///
    /// This does not touch the order cached by [`Context::backward`].
    pub fn topo_sort(&self, root: &Node<T>) -> Result<Vec<Node<T>>, MicrogradError> {
        topological_sort(root)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
