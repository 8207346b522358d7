//! neuronet: command-line front end for the CSR graph store.
//!
//! Loads an edge-list file once, then runs a single query against it.
//! Results go to stdout; progress and diagnostics go to stderr via
//! `tracing`, filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use neuronet_core::{CsrGraph, GraphConfig, DEFAULT_EDGE_CAPACITY, DEFAULT_NODE_CAPACITY};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod degree;
mod neighborhood;
mod status;
mod subgraph;
mod util;

/// Load a directed edge list into CSR form and query it.
#[derive(Parser, Debug)]
#[command(name = "neuronet")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file: one `ORIGIN DESTINATION` pair per line, `#` comments
    file: PathBuf,

    /// Initial node capacity (doubled as needed during load)
    #[arg(long, default_value_t = DEFAULT_NODE_CAPACITY, env = "NEURONET_INITIAL_NODES")]
    initial_nodes: usize,

    /// Initial edge capacity (doubled as needed during load)
    #[arg(long, default_value_t = DEFAULT_EDGE_CAPACITY, env = "NEURONET_INITIAL_EDGES")]
    initial_edges: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Node and edge counts plus estimated memory
    Stats,

    /// Out-degree of a node
    Degree {
        #[arg(allow_negative_numbers = true)]
        node: i64,
    },

    /// Out-neighbors of a node, in input order
    Neighbors {
        #[arg(allow_negative_numbers = true)]
        node: i64,

        /// Print at most this many neighbors
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Most connected node and its first neighbors
    MaxDegree {
        /// Neighbors to list for the node found
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Depth-bounded breadth-first traversal
    Bfs {
        #[arg(allow_negative_numbers = true)]
        start: i64,

        #[arg(allow_negative_numbers = true)]
        depth: i64,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = GraphConfig::new()
        .with_node_capacity(args.initial_nodes)
        .with_edge_capacity(args.initial_edges);
    let mut graph = CsrGraph::with_config(config)?;
    graph.load(&args.file)?;

    match args.command {
        Command::Stats => status::print_stats(&graph),
        Command::Degree { node } => degree::print_degree(&graph, node),
        Command::Neighbors { node, limit } => neighborhood::print_neighbors(&graph, node, limit),
        Command::MaxDegree { limit } => degree::print_max_degree(&graph, limit),
        Command::Bfs { start, depth, json } => {
            let depth = util::check_non_negative(depth, "depth")?;
            subgraph::print_bfs(&graph, start, depth, json)?;
        }
    }

    Ok(())
}
