use neuronet_core::CsrGraph;

use crate::util;

pub fn print_neighbors(graph: &CsrGraph, node: i64, limit: Option<usize>) {
    let neighbors = util::resolve_node(graph, node)
        .map(|n| graph.neighbors(n))
        .unwrap_or_default();
    println!("{}", util::join_ids(&neighbors, limit));
}
