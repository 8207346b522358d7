//! Property tests for CSR construction and bounded BFS over random edge lists.

use std::collections::VecDeque;

use neuronet_core::{bfs, CsrGraph, EdgeList, GraphConfig, NodeId};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const MAX_ID: NodeId = 40;

fn edge_list_strategy() -> impl Strategy<Value = Vec<(NodeId, NodeId)>> {
    vec((0..MAX_ID, 0..MAX_ID), 0..200)
}

fn build(pairs: &[(NodeId, NodeId)], config: GraphConfig) -> CsrGraph {
    CsrGraph::from_edge_list(&EdgeList::from_pairs(pairs.iter().copied()), config).unwrap()
}

/// Reference BFS levels over a naive adjacency list.
fn reference_levels(pairs: &[(NodeId, NodeId)], n: usize, start: NodeId) -> Vec<Option<u32>> {
    let mut adj = vec![Vec::new(); n];
    for &(o, d) in pairs {
        adj[o as usize].push(d);
    }
    let mut level = vec![None; n];
    let mut queue = VecDeque::new();
    level[start as usize] = Some(0);
    queue.push_back(start);
    while let Some(u) = queue.pop_front() {
        let l = level[u as usize].unwrap();
        for &v in &adj[u as usize] {
            if level[v as usize].is_none() {
                level[v as usize] = Some(l + 1);
                queue.push_back(v);
            }
        }
    }
    level
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn degrees_match_input(pairs in edge_list_strategy()) {
        let g = build(&pairs, GraphConfig::default());
        prop_assert_eq!(g.num_edges(), pairs.len());

        let mut total = 0;
        for i in 0..g.num_nodes() as NodeId {
            let expected = pairs.iter().filter(|(o, _)| *o == i).count();
            prop_assert_eq!(g.degree(i), expected);
            total += g.degree(i);
        }
        prop_assert_eq!(total, g.num_edges());
    }

    #[test]
    fn neighbors_follow_input_order(pairs in edge_list_strategy()) {
        let g = build(&pairs, GraphConfig::default());
        for i in 0..g.num_nodes() as NodeId {
            let expected: Vec<NodeId> =
                pairs.iter().filter(|(o, _)| *o == i).map(|&(_, d)| d).collect();
            let got = g.neighbors(i);
            prop_assert_eq!(got.len(), g.degree(i));
            prop_assert!(got.iter().all(|&d| (d as usize) < g.num_nodes()));
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn csr_is_well_formed(pairs in edge_list_strategy()) {
        let g = build(&pairs, GraphConfig::default());
        let rows = g.row_offsets();
        prop_assert_eq!(rows.len(), g.num_nodes() + 1);
        prop_assert_eq!(rows[0], 0);
        prop_assert_eq!(rows[g.num_nodes()], g.num_edges());
        prop_assert!(rows.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn growth_is_transparent(pairs in edge_list_strategy()) {
        let tiny = GraphConfig::new().with_node_capacity(1).with_edge_capacity(1);
        let big = GraphConfig::new().with_node_capacity(4_096).with_edge_capacity(4_096);
        let grown = build(&pairs, tiny);
        let presized = build(&pairs, big);
        prop_assert_eq!(grown.row_offsets(), presized.row_offsets());
        prop_assert_eq!(grown.column_indices(), presized.column_indices());
        prop_assert!(grown.node_capacity().is_power_of_two());
        prop_assert!(grown.edge_capacity().is_power_of_two());
    }

    #[test]
    fn bfs_matches_reference_levels(
        pairs in vec((0..MAX_ID, 0..MAX_ID), 1..200),
        start_seed in 0..MAX_ID,
        depth in 0u32..6,
    ) {
        let g = build(&pairs, GraphConfig::default());
        let start = start_seed % g.num_nodes() as NodeId;
        let levels = reference_levels(&pairs, g.num_nodes(), start);
        let result = bfs(&g, start, depth).unwrap();

        let mut expected_nodes: Vec<NodeId> = (0..g.num_nodes() as NodeId)
            .filter(|&v| levels[v as usize].is_some_and(|l| l <= depth))
            .collect();
        let mut got_nodes = result.nodes.clone();
        prop_assert_eq!(got_nodes[0], start);
        got_nodes.sort_unstable();
        expected_nodes.sort_unstable();
        prop_assert_eq!(got_nodes, expected_nodes);

        // Only nodes strictly inside the depth limit contribute edges.
        let expected_edges: usize = (0..g.num_nodes() as NodeId)
            .filter(|&v| levels[v as usize].is_some_and(|l| l < depth))
            .map(|v| g.degree(v))
            .sum();
        prop_assert_eq!(result.edge_count(), expected_edges);
    }

    #[test]
    fn bfs_unbounded_reaches_everything_once(
        pairs in vec((0..MAX_ID, 0..MAX_ID), 1..200),
        start_seed in 0..MAX_ID,
    ) {
        let g = build(&pairs, GraphConfig::default());
        let start = start_seed % g.num_nodes() as NodeId;
        let levels = reference_levels(&pairs, g.num_nodes(), start);
        let result = bfs(&g, start, g.num_nodes() as u32).unwrap();

        let reachable = levels.iter().filter(|l| l.is_some()).count();
        prop_assert_eq!(result.node_count(), reachable);

        let mut dedup = result.nodes.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), result.node_count());

        let degree_sum: usize = result.nodes.iter().map(|&v| g.degree(v)).sum();
        prop_assert_eq!(result.edge_count(), degree_sum);
    }
}
