//! Forward reachability over the directed road graph.

use mt_core::NodeId;

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

/// Every node reachable from `origin` by following edge directions, excluding
/// `origin` itself (even when a cycle leads back to it).
///
/// The result is sorted by `NodeId` so that a seeded choice over it is
/// reproducible regardless of traversal order.
pub fn reachable_from(network: &RoadNetwork, origin: NodeId) -> SpatialResult<Vec<NodeId>> {
    if !network.contains(origin) {
        return Err(SpatialError::NodeNotFound(origin));
    }

    let mut seen  = vec![false; network.node_count()];
    let mut stack = vec![origin];
    seen[origin.index()] = true;

    let mut out = Vec::new();
    while let Some(node) = stack.pop() {
        for e in network.out_edges(node) {
            let next = network.edge_to[e.index()];
            if !seen[next.index()] {
                seen[next.index()] = true;
                out.push(next);
                stack.push(next);
            }
        }
    }

    out.sort_unstable();
    Ok(out)
}
