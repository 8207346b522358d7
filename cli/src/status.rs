use neuronet_core::CsrGraph;

pub fn print_stats(graph: &CsrGraph) {
    println!("nodes:         {}", graph.num_nodes());
    println!("edges:         {}", graph.num_edges());
    println!(
        "memory:        ~{:.2}MB",
        graph.memory_usage() as f64 / 1_048_576.0
    );
    println!(
        "capacity:      {} nodes / {} edges",
        graph.node_capacity(),
        graph.edge_capacity()
    );
}
