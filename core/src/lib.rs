//! neuronet-core: In-memory CSR graph store.
//!
//! Loads a directed edge list once into Compressed Sparse Row arrays and
//! answers degree, neighbor, max-degree and depth-bounded BFS queries.
//! The store is immutable after load, so a built [`CsrGraph`] can be shared
//! by reference for concurrent read-only queries.
//!
//! Progress is reported through `tracing`; install a subscriber to see it.

mod config;
mod csr;
mod error;
mod graph;
mod ingest;
mod traversal;

pub use config::{GraphConfig, DEFAULT_EDGE_CAPACITY, DEFAULT_NODE_CAPACITY};
pub use error::{GraphError, Result};
pub use graph::{CsrGraph, Edge, NodeId};
pub use ingest::{parse_line, read_edge_list, EdgeList};
pub use traversal::{bfs, BfsResult};
