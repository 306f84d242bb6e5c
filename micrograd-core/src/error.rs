use crate::ops::Op;
use thiserror::Error;

/// Custom error type for the micrograd engine.
#[derive(Error, Debug)]
pub enum MicrogradError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Arity mismatch at layer {layer}: previous layer produces {expected} outputs but the layer takes {actual} inputs")]
    ArityMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("A network needs at least one layer")]
    EmptyNetwork,

    #[error("Layer index {index} out of range for a network of depth {depth}")]
    LayerIndexOutOfRange { index: usize, depth: usize },

    /// A leaf-tagged node was found with parents. The graph was built
    /// incorrectly; this is not recoverable.
    #[error("Invariant violation: leaf node {id} has {parents} parent(s)")]
    LeafWithParents { id: u64, parents: usize },

    #[error("Malformed node {id}: operator '{op}' expects {expected} parent(s), found {actual}")]
    MalformedNode {
        id: u64,
        op: Op,
        expected: usize,
        actual: usize,
    },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Failed to render graph to {path}: {source}")]
    GraphRender {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
