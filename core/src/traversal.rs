use std::collections::VecDeque;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{CsrGraph, Edge, NodeId};

/// Nodes and edges discovered by a bounded BFS.
///
/// `nodes` holds each visited node once, in discovery order. `edges` holds
/// every edge scanned while expanding a node, including edges back into
/// nodes that were already visited, so it is not a BFS tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

impl BfsResult {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Queued,
    Expanded,
}

/// BFS from `start`, following outgoing edges up to `max_depth` hops.
///
/// Nodes first reached at level `max_depth` are reported but not expanded,
/// so none of their outgoing edges appear in the result. `max_depth == 0`
/// returns just `start`.
///
/// An out-of-range `start` is reported as `OutOfRange`; callers that want
/// the empty result can fall back to `BfsResult::default()`.
pub fn bfs(graph: &CsrGraph, start: NodeId, max_depth: u32) -> Result<BfsResult> {
    if !graph.contains(start) {
        tracing::warn!(start, node_count = graph.num_nodes(), "BFS start node out of range");
        return Err(GraphError::OutOfRange {
            node: i64::from(start),
            node_count: graph.num_nodes(),
        });
    }

    tracing::info!(start, max_depth, "running BFS");

    let mut state = vec![VisitState::Unvisited; graph.num_nodes()];
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut result = BfsResult::default();

    state[start as usize] = VisitState::Queued;
    queue.push_back((start, 0));
    result.nodes.push(start);

    while let Some((current, level)) = queue.pop_front() {
        if level >= max_depth {
            continue;
        }
        // Nodes enter the queue once, so each is expanded at most once.
        debug_assert_eq!(state[current as usize], VisitState::Queued);
        state[current as usize] = VisitState::Expanded;

        for &next in graph.out_neighbors(current) {
            result.edges.push(Edge {
                origin: current,
                destination: next,
            });

            let slot = &mut state[next as usize];
            if *slot == VisitState::Unvisited {
                *slot = VisitState::Queued;
                queue.push_back((next, level + 1));
                result.nodes.push(next);
            }
        }
    }

    tracing::info!(nodes_found = result.nodes.len(), edges = result.edges.len(), "BFS complete");
    Ok(result)
}
