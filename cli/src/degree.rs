use neuronet_core::CsrGraph;

use crate::util;

pub fn print_degree(graph: &CsrGraph, node: i64) {
    let degree = util::resolve_node(graph, node).map_or(0, |n| graph.degree(n));
    println!("{}", degree);
}

/// Report the most connected node and its first `limit` neighbors.
pub fn print_max_degree(graph: &CsrGraph, limit: usize) {
    let Some((node, degree)) = graph.max_degree() else {
        println!("graph is empty");
        return;
    };

    let neighbors = graph.neighbors(node);
    println!("node:      {}", node);
    println!("degree:    {}", degree);
    println!("neighbors: {}", util::join_ids(&neighbors, Some(limit)));
}
