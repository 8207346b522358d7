use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the graph store.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The edge-list resource could not be opened. The store is left empty.
    #[error("cannot open edge list '{path}': {source}", path = path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A node id outside `[0, node_count)` was supplied to a query.
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    OutOfRange { node: i64, node_count: usize },

    /// A backing buffer could not be allocated or grown.
    #[error("failed to allocate {requested} slots for {buffer}")]
    AllocationFailure {
        buffer: &'static str,
        requested: usize,
    },
}

impl GraphError {
    /// Whether the error leaves the caller with nothing sensible to continue on.
    ///
    /// Only allocation failures are fatal; out-of-range queries and a missing
    /// resource both leave the store in a valid (possibly empty) state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GraphError::AllocationFailure { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
