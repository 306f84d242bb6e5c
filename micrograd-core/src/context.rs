use crate::node::{Node, NodeOptions};
use crate::ops::traits::Scalar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared state behind a [`Context`] handle.
pub(crate) struct ContextInner<T> {
    /// Last identifier handed out. Identifiers start at 1 and are never reused.
    max_id: AtomicU64,
    /// Topological order computed by the last backward pass, root first.
    pub(crate) topo_sorted: Mutex<Vec<Node<T>>>,
    /// Source of randomness for weight initialization.
    rng: Mutex<StdRng>,
}

/// Creates nodes and records the operations between them.
///
/// `Context` is a cheap handle (`Arc` clone): neurons, layers and networks
/// keep a clone so they can record their own forward computations. Identifier
/// allocation is atomic, so several threads may create nodes concurrently.
/// Everything else (the cached topological order, node gradients and values)
/// must be driven by one thread at a time per graph.
pub struct Context<T> {
    pub(crate) inner: Arc<ContextInner<T>>,
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Context {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Scalar> Default for Context<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("max_id", &self.inner.max_id.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Context<T> {
    /// Creates a context whose weight initialization is seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a context with a deterministic weight initialization.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Context {
            inner: Arc::new(ContextInner {
                max_id: AtomicU64::new(0),
                topo_sorted: Mutex::new(Vec::new()),
                rng: Mutex::new(rng),
            }),
        }
    }

    /// Creates a node holding `value` with the next identifier.
    ///
    /// The gradient starts at zero. Parents, operator, label and parameter come
    /// from `options`; `NodeOptions::default()` yields a plain leaf.
    pub fn create(&self, value: T, options: NodeOptions<T>) -> Node<T> {
        Node::from_options(self.next_id(), value, options)
    }

    /// Creates an unlabeled leaf.
    pub fn constant(&self, value: T) -> Node<T> {
        self.create(value, NodeOptions::default())
    }

    /// Creates a labeled leaf.
    pub fn leaf(&self, value: T, label: impl Into<String>) -> Node<T> {
        self.create(value, NodeOptions::default().with_label(label))
    }

    /// Creates one unlabeled leaf per value, in order.
    pub fn values(&self, values: &[T]) -> Vec<Node<T>> {
        values.iter().map(|&v| self.constant(v)).collect()
    }

    /// Draws one N(0, 1) sample from the context's generator.
    pub fn sample_standard_normal(&self) -> T {
        T::sample_standard_normal(&mut *self.lock_rng())
    }

    /// Returns true if both handles point to the same context.
    pub fn ptr_eq(lhs: &Self, rhs: &Self) -> bool {
        Arc::ptr_eq(&lhs.inner, &rhs.inner)
    }

    /// Number of nodes created so far.
    pub fn node_count(&self) -> u64 {
        self.inner.max_id.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> u64 {
        self.inner.max_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        self.inner.rng.lock().unwrap_or_else(|poisoned| {
            log::warn!("Mutex for the context RNG was poisoned. Recovering.");
            poisoned.into_inner()
        })
    }

    pub(crate) fn lock_topo_sorted(&self) -> MutexGuard<'_, Vec<Node<T>>> {
        self.inner.topo_sorted.lock().unwrap_or_else(|poisoned| {
            log::warn!("Mutex for the cached topological order was poisoned. Recovering.");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
