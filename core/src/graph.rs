use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::config::GraphConfig;
use crate::csr;
use crate::error::{GraphError, Result};
use crate::ingest::{self, EdgeList};
use crate::traversal::{self, BfsResult};

/// Dense node identifier in `[0, num_nodes)`.
pub type NodeId = u32;

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub origin: NodeId,
    pub destination: NodeId,
}

/// Directed graph in Compressed Sparse Row layout.
///
/// `row_ptr[i]..row_ptr[i + 1]` indexes node `i`'s out-neighbors in
/// `col_indices`, in the order those edges appeared in the input.
///
/// Capacity is tracked separately from the logical sizes. It starts at the
/// configured values, doubles until a load fits, and never shrinks. The
/// buffers always hold at least `num_nodes + 1` offsets and `num_edges`
/// destinations; a failed load resets the store to empty rather than leave
/// it half built.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    row_ptr: Vec<usize>,
    col_indices: Vec<NodeId>,
    num_nodes: usize,
    num_edges: usize,
    node_capacity: usize,
    edge_capacity: usize,
}

impl CsrGraph {
    /// Empty store with the default capacities.
    pub fn new() -> Self {
        let config = GraphConfig::default();
        let mut row_ptr = Vec::with_capacity(config.initial_node_capacity + 1);
        row_ptr.push(0);
        Self {
            row_ptr,
            col_indices: Vec::with_capacity(config.initial_edge_capacity),
            num_nodes: 0,
            num_edges: 0,
            node_capacity: config.initial_node_capacity,
            edge_capacity: config.initial_edge_capacity,
        }
    }

    /// Empty store pre-sized from `config`.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        let node_capacity = config.initial_node_capacity.max(1);
        let edge_capacity = config.initial_edge_capacity.max(1);

        let mut row_ptr = Vec::new();
        reserve_total(&mut row_ptr, node_capacity.saturating_add(1), "row_ptr")?;
        row_ptr.push(0);
        let mut col_indices = Vec::new();
        reserve_total(&mut col_indices, edge_capacity, "col_indices")?;

        Ok(Self {
            row_ptr,
            col_indices,
            num_nodes: 0,
            num_edges: 0,
            node_capacity,
            edge_capacity,
        })
    }

    /// Build a store directly from an edge list.
    pub fn from_edge_list(edges: &EdgeList, config: GraphConfig) -> Result<Self> {
        let mut graph = Self::with_config(config)?;
        graph.build(edges)?;
        Ok(graph)
    }

    /// Load an edge-list file, replacing any previous contents.
    ///
    /// A missing or unreadable file leaves the store empty and returns
    /// `ResourceUnavailable`. Malformed lines are skipped.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading edge list");

        let edges = match ingest::read_edge_list(path) {
            Ok(edges) => edges,
            Err(e) => {
                self.reset();
                tracing::debug!(error = %e, "edge list unavailable, store reset");
                return Err(e);
            }
        };
        self.build(&edges)
    }

    /// Load from any buffered reader, replacing any previous contents.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let edges = EdgeList::from_reader(reader);
        self.build(&edges)
    }

    /// Bulk-build the CSR arrays from `edges`, replacing any previous contents.
    pub fn build(&mut self, edges: &EdgeList) -> Result<()> {
        let nodes = edges.node_count();
        let edge_count = edges.len();

        let built = self
            .ensure_capacity(nodes, edge_count)
            .and_then(|()| self.fill(edges, nodes));
        if let Err(e) = built {
            self.reset();
            return Err(e);
        }

        tracing::info!(
            nodes = self.num_nodes,
            edges = self.num_edges,
            memory_mb = format_args!("{:.2}", self.memory_usage() as f64 / 1_048_576.0),
            "CSR graph built"
        );
        Ok(())
    }

    fn fill(&mut self, edges: &EdgeList, nodes: usize) -> Result<()> {
        self.reset();
        // Both resizes stay within the capacity reserved above.
        self.row_ptr.resize(nodes + 1, 0);
        self.col_indices.resize(edges.len(), 0);
        csr::build_into(edges.edges(), &mut self.row_ptr, &mut self.col_indices)?;
        self.num_nodes = nodes;
        self.num_edges = edges.len();
        Ok(())
    }

    /// Double node/edge capacity until it covers the requested sizes.
    fn ensure_capacity(&mut self, nodes: usize, edges: usize) -> Result<()> {
        let node_capacity = doubled_until(self.node_capacity, nodes, "row_ptr")?;
        if node_capacity > self.node_capacity {
            reserve_total(&mut self.row_ptr, node_capacity.saturating_add(1), "row_ptr")?;
            tracing::debug!(
                from = self.node_capacity,
                to = node_capacity,
                "grew node capacity"
            );
            self.node_capacity = node_capacity;
        }

        let edge_capacity = doubled_until(self.edge_capacity, edges, "col_indices")?;
        if edge_capacity > self.edge_capacity {
            reserve_total(&mut self.col_indices, edge_capacity, "col_indices")?;
            tracing::debug!(
                from = self.edge_capacity,
                to = edge_capacity,
                "grew edge capacity"
            );
            self.edge_capacity = edge_capacity;
        }

        Ok(())
    }

    /// Drop logical contents, keep allocations.
    fn reset(&mut self) {
        self.row_ptr.clear();
        self.row_ptr.push(0);
        self.col_indices.clear();
        self.num_nodes = 0;
        self.num_edges = 0;
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn edge_capacity(&self) -> usize {
        self.edge_capacity
    }

    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.num_nodes
    }

    /// Validate an externally supplied id, which may be negative.
    pub fn node(&self, raw: i64) -> Result<NodeId> {
        if raw < 0 || raw as u64 >= self.num_nodes as u64 {
            return Err(GraphError::OutOfRange {
                node: raw,
                node_count: self.num_nodes,
            });
        }
        Ok(raw as NodeId)
    }

    /// Out-degree of `node`; 0 when out of range.
    pub fn degree(&self, node: NodeId) -> usize {
        self.out_neighbors(node).len()
    }

    /// Owned copy of `node`'s out-neighbors; empty when out of range.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.out_neighbors(node).to_vec()
    }

    /// Borrowed view of `node`'s row in `col_indices`.
    pub(crate) fn out_neighbors(&self, node: NodeId) -> &[NodeId] {
        if !self.contains(node) {
            return &[];
        }
        let i = node as usize;
        &self.col_indices[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    /// Node with the highest out-degree and that degree.
    ///
    /// Ties go to the lowest id. `None` only for an empty store.
    pub fn max_degree(&self) -> Option<(NodeId, usize)> {
        if self.num_nodes == 0 {
            return None;
        }

        let mut best = (0, 0);
        for (i, w) in self.row_ptr[..=self.num_nodes].windows(2).enumerate() {
            let degree = w[1] - w[0];
            if degree > best.1 {
                best = (i as NodeId, degree);
            }
        }

        tracing::info!(node = best.0, degree = best.1, "highest-degree node");
        Some(best)
    }

    /// Lowest-indexed node of maximal out-degree; 0 for an empty store.
    pub fn max_degree_node(&self) -> NodeId {
        self.max_degree().map_or(0, |(node, _)| node)
    }

    /// Depth-bounded BFS from `start`. See [`traversal::bfs`].
    pub fn bfs(&self, start: NodeId, max_depth: u32) -> Result<BfsResult> {
        traversal::bfs(self, start, max_depth)
    }

    /// Every edge in CSR order: by origin, then input order within a row.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_nodes as NodeId).flat_map(move |origin| {
            self.out_neighbors(origin)
                .iter()
                .map(move |&destination| Edge {
                    origin,
                    destination,
                })
        })
    }

    /// Logical row offsets, `num_nodes + 1` entries.
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_ptr[..=self.num_nodes]
    }

    /// Logical column indices, `num_edges` entries.
    pub fn column_indices(&self) -> &[NodeId] {
        &self.col_indices[..self.num_edges]
    }

    /// Approximate size of the logical CSR arrays in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        (self.num_nodes + 1) * size_of::<usize>() + self.num_edges * size_of::<NodeId>()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest `current * 2^k` that is at least `required`.
fn doubled_until(current: usize, required: usize, buffer: &'static str) -> Result<usize> {
    let mut capacity = current.max(1);
    while capacity < required {
        capacity = capacity
            .checked_mul(2)
            .ok_or(GraphError::AllocationFailure {
                buffer,
                requested: required,
            })?;
    }
    Ok(capacity)
}

/// Make sure `buf` can hold `total` elements without reallocating.
fn reserve_total<T>(buf: &mut Vec<T>, total: usize, buffer: &'static str) -> Result<()> {
    let additional = total.saturating_sub(buf.len());
    buf.try_reserve_exact(additional)
        .map_err(|_| GraphError::AllocationFailure {
            buffer,
            requested: total,
        })
}
