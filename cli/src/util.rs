use anyhow::bail;
use neuronet_core::{CsrGraph, NodeId};

/// Validate that a depth parameter is non-negative and fits a `u32`.
pub fn check_non_negative(value: i64, param_name: &str) -> anyhow::Result<u32> {
    if value < 0 {
        bail!("neuronet: {} must be non-negative, got {}", param_name, value);
    }
    u32::try_from(value)
        .map_err(|_| anyhow::anyhow!("neuronet: {} too large, got {}", param_name, value))
}

/// Resolve a command-line node id. Out-of-range ids are reported and yield None.
pub fn resolve_node(graph: &CsrGraph, raw: i64) -> Option<NodeId> {
    match graph.node(raw) {
        Ok(node) => Some(node),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

/// Join ids with spaces, truncated to `limit` when given.
pub fn join_ids(ids: &[NodeId], limit: Option<usize>) -> String {
    let shown = limit.map_or(ids.len(), |l| l.min(ids.len()));
    let mut out = ids[..shown]
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if shown < ids.len() {
        out.push_str(&format!(" ... ({} more)", ids.len() - shown));
    }
    out
}
