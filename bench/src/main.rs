use std::time::Instant;

use neuronet_core::{CsrGraph, EdgeList, GraphConfig, NodeId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Generator = fn(u32) -> EdgeList;

fn main() -> anyhow::Result<()> {
    // Core progress logs are noise next to the timing table; opt in via RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if node_count == 0 {
        anyhow::bail!("node_count must be positive");
    }

    if mode == "help" || mode == "--help" {
        println!("Usage: neuronet-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Branching tree (deep, narrow paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hubs)");
        println!("  smallworld  Ring lattice + random shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!();
        println!("Default node_count: 1000000");
        return Ok(());
    }

    println!("neuronet-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (ring + shortcuts)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "all" => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (ring + shortcuts)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
        ],
        _ => anyhow::bail!("unknown mode: {}. Use --help for options.", mode),
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, node_count: u32) -> anyhow::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generator(node_count);
    let gen_time = t.elapsed();

    // Default capacities on purpose: the build exercises the doubling path.
    let t = Instant::now();
    let graph = CsrGraph::from_edge_list(&edges, GraphConfig::default())?;
    let build_time = t.elapsed();
    drop(edges);

    println!(
        "Generated in {:.2}s, built CSR in {:.2}s: {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64(),
        graph.num_nodes(),
        graph.num_edges(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let hub = graph.max_degree();
    let scan_time = t.elapsed();
    if let Some((node, degree)) = hub {
        println!(
            "Max degree: node {} ({} out-edges) in {:.1}ms",
            node,
            degree,
            scan_time.as_secs_f64() * 1000.0
        );
    }

    let mut starts: Vec<NodeId> = vec![0];
    if let Some((node, _)) = hub.filter(|&(node, _)| node != 0) {
        starts.push(node);
    }

    for start in starts {
        println!();
        println!("BFS from node {}", start);
        println!("{:>8} {:>12} {:>12} {:>10}", "depth", "nodes", "edges", "time");
        println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

        let mut previous = 0;
        for depth in [1, 2, 3, 5, 10, 20, 50] {
            let t = Instant::now();
            let result = graph.bfs(start, depth)?;
            let elapsed = t.elapsed();
            println!(
                "{:>8} {:>12} {:>12} {:>8.1}ms",
                depth,
                result.node_count(),
                result.edge_count(),
                elapsed.as_secs_f64() * 1000.0
            );
            // Stop once a deeper search finds nothing new.
            if result.node_count() == previous || result.node_count() >= graph.num_nodes() {
                println!("{:>8} (frontier exhausted)", "");
                break;
            }
            previous = result.node_count();
        }
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, O(n + edges)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % u64::from(max)) as u32
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Breadth-first branching tree, every parent pointing at three children.
///
/// Log-depth with exponential width; BFS depth cutoffs bite hard here.
fn gen_lsystem(node_count: u32) -> EdgeList {
    let branching = 3u32;
    let mut edges = EdgeList::new();

    let mut next_id: u32 = 1;
    let mut frontier: Vec<u32> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                edges.push(parent, next_id);
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    edges
}

/// Scale-free via endpoint sampling.
///
/// Each new node links to endpoints drawn from the running endpoint list,
/// so high-degree nodes attract more links. Edges point from new to old,
/// plus a reverse edge from the target so hubs have large out-degree.
fn gen_scale_free(node_count: u32) -> EdgeList {
    let edges_per_node = 5u32;
    let mut edges = EdgeList::new();
    let mut rng = FastRng::new(12345);
    let mut endpoints: Vec<u32> =
        Vec::with_capacity(node_count as usize * edges_per_node as usize * 2);

    let seed = 5u32.min(node_count);
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push(i, j);
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            if endpoints.is_empty() {
                break;
            }
            let target = endpoints[rng.next(endpoints.len() as u32) as usize];
            if target != new_node {
                edges.push(new_node, target);
                edges.push(target, new_node);
                endpoints.push(new_node);
                endpoints.push(target);
            }
        }
    }

    edges
}

/// Ring lattice with `k` forward neighbors per node, each edge rewired to a
/// random target with probability `p`.
fn gen_small_world(node_count: u32) -> EdgeList {
    let k = 10u32;
    let p = 0.05f64;
    let mut edges = EdgeList::new();
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = ((u64::from(i) + u64::from(j)) % u64::from(node_count)) as u32;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                edges.push(i, if rewired != i { rewired } else { neighbor });
            } else {
                edges.push(i, neighbor);
            }
        }
    }

    edges
}

/// Erdos-Renyi: ~10 uniform random out-edges per node on average.
fn gen_random(node_count: u32) -> EdgeList {
    let target_edges = u64::from(node_count) * 10;
    let mut edges = EdgeList::new();
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            edges.push(from, to);
        }
    }

    edges
}
