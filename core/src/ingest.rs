//! Edge-list ingestion.
//!
//! Input is plain text, one `ORIGIN DESTINATION` pair per line. Lines that
//! start with `#` are comments. A line whose first two tokens are not
//! non-negative integers is dropped without a diagnostic; tokens after the
//! pair (timestamps, weights, trailing notes) are ignored. SNAP-style dumps
//! routinely carry stray headers and extra columns, and a load should not
//! fail over them.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, NodeId};

/// Raw edges accepted from an input source, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<Edge>,
    max_id: Option<NodeId>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from in-memory pairs. Every pair is accepted.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut list = Self::new();
        for (origin, destination) in pairs {
            list.push(origin, destination);
        }
        list
    }

    /// Parse every line of `reader`.
    ///
    /// Lines are read into a growable buffer, so there is no length limit.
    /// An I/O error mid-stream stops ingestion and keeps what was accepted.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Self {
        let mut list = Self::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        accepted = list.len(),
                        "edge list read failed mid-stream, keeping edges read so far"
                    );
                    break;
                }
            }

            if let Some((origin, destination)) = parse_line(&line) {
                list.push(origin, destination);
            }
        }

        list
    }

    /// Append one edge, tracking the largest id on either end.
    pub fn push(&mut self, origin: NodeId, destination: NodeId) {
        self.edges.push(Edge {
            origin,
            destination,
        });
        let hi = origin.max(destination);
        self.max_id = Some(self.max_id.map_or(hi, |m| m.max(hi)));
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn max_id(&self) -> Option<NodeId> {
        self.max_id
    }

    /// Dense node count implied by the largest id: `max_id + 1`.
    ///
    /// The running maximum starts at 0, so a list with no edges still
    /// describes the single node 0.
    pub fn node_count(&self) -> usize {
        self.max_id.unwrap_or(0) as usize + 1
    }
}

/// Open `path` and parse it as an edge list.
///
/// Opening is the only step that can fail.
pub fn read_edge_list(path: &Path) -> Result<EdgeList> {
    let file = File::open(path).map_err(|source| GraphError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EdgeList::from_reader(BufReader::new(file)))
}

/// Parse a single line into an `(origin, destination)` pair.
///
/// Returns `None` for comments and for lines whose first two tokens aren't
/// integers in `NodeId` range. Anything after the pair is ignored. Non-UTF-8
/// lines are dropped like any other malformed line.
pub fn parse_line(line: &[u8]) -> Option<(NodeId, NodeId)> {
    if line.first() == Some(&b'#') {
        return None;
    }

    let text = std::str::from_utf8(line).ok()?;
    let mut tokens = text.split_ascii_whitespace();
    let origin = tokens.next()?.parse::<NodeId>().ok()?;
    let destination = tokens.next()?.parse::<NodeId>().ok()?;
    Some((origin, destination))
}
