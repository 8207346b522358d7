use neuronet_core::{BfsResult, CsrGraph};

use crate::util;

/// Run a bounded BFS and print it. An out-of-range start prints an empty result.
pub fn print_bfs(graph: &CsrGraph, start: i64, depth: u32, json: bool) -> anyhow::Result<()> {
    let result = util::resolve_node(graph, start)
        .and_then(|s| graph.bfs(s, depth).ok())
        .unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result));
    }
    Ok(())
}

fn render(result: &BfsResult) -> String {
    let mut out = format!(
        "nodes ({}): {}\n",
        result.node_count(),
        util::join_ids(&result.nodes, None)
    );
    out.push_str(&format!("edges ({}):\n", result.edge_count()));
    for edge in &result.edges {
        out.push_str(&format!("  {} -> {}\n", edge.origin, edge.destination));
    }
    out
}
