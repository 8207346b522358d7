//! Counting-sort CSR construction.
//!
//! Three passes over borrowed buffers: count out-degrees, prefix-sum them
//! into row offsets, then place each destination using per-node cursors.
//! The caller sizes the buffers; nothing here grows the store.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, NodeId};

/// Count out-degree per origin. `degrees` must cover every origin id.
pub(crate) fn count_degrees(edges: &[Edge], degrees: &mut [usize]) {
    for edge in edges {
        degrees[edge.origin as usize] += 1;
    }
}

/// `row_ptr[i + 1] = row_ptr[i] + degrees[i]`, with `row_ptr[0] = 0`.
pub(crate) fn prefix_sum(degrees: &[usize], row_ptr: &mut [usize]) {
    debug_assert_eq!(row_ptr.len(), degrees.len() + 1);
    row_ptr[0] = 0;
    for (i, &d) in degrees.iter().enumerate() {
        row_ptr[i + 1] = row_ptr[i] + d;
    }
}

/// Place destinations into `col_indices`, keeping input order within each row.
///
/// `cursors` is scratch space of one slot per node and is zeroed first.
pub(crate) fn place_edges(
    edges: &[Edge],
    row_ptr: &[usize],
    cursors: &mut [usize],
    col_indices: &mut [NodeId],
) {
    cursors.fill(0);
    for edge in edges {
        let origin = edge.origin as usize;
        col_indices[row_ptr[origin] + cursors[origin]] = edge.destination;
        cursors[origin] += 1;
    }
}

/// Build CSR arrays for `edges` into pre-sized buffers.
///
/// `row_ptr` must hold `node_count + 1` slots and `col_indices` exactly
/// `edges.len()`. The degree counters are allocated here and reused as
/// insertion cursors for the placement pass.
pub(crate) fn build_into(
    edges: &[Edge],
    row_ptr: &mut [usize],
    col_indices: &mut [NodeId],
) -> Result<()> {
    debug_assert!(!row_ptr.is_empty());
    debug_assert_eq!(col_indices.len(), edges.len());
    let node_count = row_ptr.len() - 1;

    let mut degrees: Vec<usize> = Vec::new();
    degrees
        .try_reserve_exact(node_count)
        .map_err(|_| GraphError::AllocationFailure {
            buffer: "degree counters",
            requested: node_count,
        })?;
    degrees.resize(node_count, 0);

    count_degrees(edges, &mut degrees);
    prefix_sum(&degrees, row_ptr);
    place_edges(edges, row_ptr, &mut degrees, col_indices);

    Ok(())
}
