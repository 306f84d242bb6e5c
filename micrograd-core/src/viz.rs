//! Graphviz rendering of a recorded graph.
//!
//! Every value becomes a record vertex `{ label | data x.xxxx | grad x.xxxx }`.
//! A value produced by an operator also gets a small vertex holding the
//! operator symbol: each operand points at that vertex and the vertex points
//! at the value. Rasterizing the DOT text is left to the `dot` tool.

use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::Path;

/// Builds the DOT description of every node reachable from `root`.
///
/// Vertices and edges are emitted in identifier order, so the same graph
/// always produces the same text. Rendering only reads node state.
pub fn to_dot<T: Scalar>(root: &Node<T>) -> String {
    let (nodes, edges) = trace(root);

    let mut buf = String::new();
    buf += "digraph G {\n";
    buf += "  rankdir=LR;\n\n";

    buf += "  // values\n";
    for node in nodes.values() {
        let _ = writeln!(
            buf,
            "  n{} [label=\"{{ {} | data {:.4} | grad {:.4} }}\", shape=record];",
            node.id(),
            escape_record(node.label().unwrap_or("")),
            node.value(),
            node.grad()
        );
        if !node.is_leaf() {
            let _ = writeln!(buf, "  op{} [label=\"{}\"];", node.id(), node.op());
        }
    }
    buf += "\n";

    buf += "  // edges\n";
    for node in nodes.values().filter(|n| !n.is_leaf()) {
        let _ = writeln!(buf, "  op{id} -> n{id};", id = node.id());
    }
    for (parent, child) in &edges {
        let _ = writeln!(buf, "  n{} -> op{};", parent, child);
    }
    buf += "}\n";
    buf
}

/// Writes [`to_dot`] of `root` to `path`.
pub fn render<T: Scalar>(path: impl AsRef<Path>, root: &Node<T>) -> Result<(), MicrogradError> {
    let path = path.as_ref();
    log::info!("Rendering graph of node {} to {}", root.id(), path.display());
    std::fs::write(path, to_dot(root)).map_err(|source| MicrogradError::GraphRender {
        path: path.display().to_string(),
        source,
    })
}

type Trace<T> = (BTreeMap<u64, Node<T>>, BTreeSet<(u64, u64)>);

/// Collects reachable nodes keyed by id, and `(parent, child)` edges.
fn trace<T: Scalar>(root: &Node<T>) -> Trace<T> {
    let mut nodes = BTreeMap::new();
    let mut edges = BTreeSet::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if nodes.contains_key(&node.id()) {
            continue;
        }
        for parent in node.parents() {
            edges.insert((parent.id(), node.id()));
            stack.push(parent.clone());
        }
        nodes.insert(node.id(), node);
    }
    (nodes, edges)
}

fn escape_record(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::test_utils::perceptron;

    #[test]
    fn test_single_leaf() {
        let ctx = Context::<f64>::new();
        let a = ctx.leaf(1.5, "a");
        let dot = to_dot(&a);

        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("n1 [label=\"{ a | data 1.5000 | grad 0.0000 }\", shape=record];"));
        assert!(!dot.contains("op1"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn test_perceptron_graph() {
        let ctx = Context::<f64>::new();
        let p = perceptron(&ctx);
        ctx.backward(&p.o).unwrap();
        let dot = to_dot(&p.o);

        let o = p.o.id();
        let n = p.n.id();
        assert!(dot.contains(&format!("op{} [label=\"tanh\"];", o)));
        assert!(dot.contains(&format!("op{o} -> n{o};", o = o)));
        assert!(dot.contains(&format!("n{} -> op{};", n, o)));
        assert!(dot.contains(&format!("n{} -> op{};", p.b.id(), n)));
        assert!(dot.contains("{ o | data 0.7071 | grad 1.0000 }"));
        assert!(dot.contains("{ x1 | data 2.0000 | grad -1.5000 }"));
        assert!(dot.contains("{ x1*w1 | data -6.0000 | grad 0.5000 }"));
        // 5 leaves + 5 derived values, one op vertex per derived value
        assert_eq!(dot.matches("shape=record").count(), 10);
        assert_eq!(dot.matches("[label=\"+\"]").count(), 2);
        assert_eq!(dot.matches("[label=\"*\"]").count(), 2);
    }

    #[test]
    fn test_repeated_operand_has_one_edge() {
        let ctx = Context::<f64>::new();
        let a = ctx.leaf(3.0, "a");
        let sq = ctx.mul(&a, &a);
        let dot = to_dot(&sq);

        assert_eq!(dot.matches(&format!("n{} -> op{};", a.id(), sq.id())).count(), 1);
    }

    #[test]
    fn test_labels_are_escaped() {
        let ctx = Context::<f64>::new();
        let a = ctx.leaf(0.0, "x1w1|x2w2 {sum}");
        let dot = to_dot(&a);

        assert!(dot.contains("x1w1\\|x2w2 \\{sum\\}"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let ctx = Context::<f64>::new();
        let p = perceptron(&ctx);
        assert_eq!(to_dot(&p.o), to_dot(&p.o));
    }

    #[test]
    fn test_render_writes_file() {
        let ctx = Context::<f64>::new();
        let p = perceptron(&ctx);
        let path = std::env::temp_dir().join(format!("micrograd-viz-{}.dot", std::process::id()));

        render(&path, &p.o).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, to_dot(&p.o));
    }

    #[test]
    fn test_render_reports_io_error() {
        let ctx = Context::<f64>::new();
        let a = ctx.constant(1.0);
        let path = std::env::temp_dir().join("micrograd-missing-dir").join("nested").join("g.dot");

        match render(&path, &a) {
            Err(MicrogradError::GraphRender { path: p, .. }) => assert!(p.ends_with("g.dot")),
            other => panic!("Expected GraphRender, got {:?}", other),
        }
    }
}
