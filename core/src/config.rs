/// Default number of node slots reserved by a fresh store.
pub const DEFAULT_NODE_CAPACITY: usize = 1_000;

/// Default number of edge slots reserved by a fresh store.
pub const DEFAULT_EDGE_CAPACITY: usize = 10_000;

/// Initial sizing for a [`CsrGraph`](crate::CsrGraph).
///
/// Capacities are starting points only: the store doubles them as needed
/// during load and never shrinks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub initial_node_capacity: usize,
    pub initial_edge_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self {
            initial_node_capacity: DEFAULT_NODE_CAPACITY,
            initial_edge_capacity: DEFAULT_EDGE_CAPACITY,
        }
    }

    /// Zero is bumped to one so doubling always makes progress.
    pub fn with_node_capacity(mut self, nodes: usize) -> Self {
        self.initial_node_capacity = nodes.max(1);
        self
    }

    pub fn with_edge_capacity(mut self, edges: usize) -> Self {
        self.initial_edge_capacity = edges.max(1);
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new()
    }
}
