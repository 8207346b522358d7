//! File-backed loading through the public API.

use std::io::Write;

use neuronet_core::{CsrGraph, GraphConfig, GraphError};
use tempfile::NamedTempFile;

fn write_edges(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_sample_file() {
    let file = write_edges("# Directed graph\n# FromNodeId\tToNodeId\n0 1\n0 2\n1 2\n#comment\n2 0\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();

    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_edges(), 4);
    assert_eq!(g.neighbors(0), vec![1, 2]);
    assert_eq!(g.neighbors(2), vec![0]);

    let result = g.bfs(0, 1).unwrap();
    assert_eq!(result.nodes, vec![0, 1, 2]);
    let edges: Vec<(u32, u32)> = result.edges.iter().map(|e| (e.origin, e.destination)).collect();
    assert_eq!(edges, vec![(0, 1), (0, 2)]);
}

#[test]
fn test_load_out_of_range_bfs_after_file() {
    let file = write_edges("0 1\n0 2\n1 2\n2 0\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();

    for raw in [-1, g.num_nodes() as i64] {
        let result = g.node(raw).and_then(|start| g.bfs(start, 2));
        assert!(matches!(result, Err(GraphError::OutOfRange { .. })));
        let empty = result.unwrap_or_default();
        assert!(empty.nodes.is_empty());
        assert!(empty.edges.is_empty());
    }
}

#[test]
fn test_load_tolerates_malformed_lines() {
    let file = write_edges("0 1\n\nfoo bar\n-3 4\n1 2 3\n7\n2 3\r\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();
    // "1 2 3" keeps its pair; the rest of the junk is dropped.
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.neighbors(1), vec![2]);
}

#[test]
fn test_load_extra_columns_kept_as_edges() {
    // SNAP temporal dumps carry a timestamp column after the pair.
    let file = write_edges("# FromNodeId ToNodeId Timestamp\n0 1 1217567877\n0 2 1217573801\n2 1 1217606247 # late\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.neighbors(0), vec![1, 2]);
    assert_eq!(g.neighbors(2), vec![1]);
}

#[test]
fn test_load_comment_only_file() {
    let file = write_edges("# Directed graph\n# Nodes: 0 Edges: 0\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();
    assert_eq!(g.num_nodes(), 1);
    assert_eq!(g.num_edges(), 0);

    let result = g.bfs(0, 3).unwrap();
    assert_eq!(result.nodes, vec![0]);
    assert!(result.edges.is_empty());
}

#[test]
fn test_load_long_lines() {
    let mut contents = String::new();
    contents.push('#');
    contents.push_str(&"x".repeat(1_000));
    contents.push('\n');
    contents.push_str(&" ".repeat(512));
    contents.push_str("3 1\n");
    let file = write_edges(&contents);

    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();
    assert_eq!(g.num_edges(), 1);
    assert_eq!(g.neighbors(3), vec![1]);
}

#[test]
fn test_load_beyond_default_capacity() {
    let mut contents = String::new();
    for i in 0..25_000u32 {
        contents.push_str(&format!("{} {}\n", i % 1_500, (i * 31) % 2_500));
    }
    let file = write_edges(&contents);

    let mut grown = CsrGraph::new();
    grown.load(file.path()).unwrap();
    let mut presized = CsrGraph::with_config(
        GraphConfig::new()
            .with_node_capacity(4_096)
            .with_edge_capacity(32_768),
    )
    .unwrap();
    presized.load(file.path()).unwrap();

    assert_eq!(grown.num_edges(), 25_000);
    assert!(grown.node_capacity() >= grown.num_nodes());
    assert!(grown.edge_capacity() >= 25_000);
    assert_eq!(grown.row_offsets(), presized.row_offsets());
    assert_eq!(grown.column_indices(), presized.column_indices());
    assert_eq!(grown.max_degree(), presized.max_degree());
    assert_eq!(grown.bfs(0, 3).unwrap(), presized.bfs(0, 3).unwrap());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = CsrGraph::new();
    let err = g.load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, GraphError::ResourceUnavailable { .. }));
    assert!(!err.is_fatal());
    assert_eq!(g.num_nodes(), 0);
    assert_eq!(g.num_edges(), 0);
}

#[test]
fn test_shared_read_only_queries() {
    let file = write_edges("0 1\n1 2\n2 3\n3 0\n");
    let mut g = CsrGraph::new();
    g.load(file.path()).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u32)
            .map(|start| {
                let g = &g;
                s.spawn(move || g.bfs(start, 4).unwrap().node_count())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 4);
        }
    });
}
