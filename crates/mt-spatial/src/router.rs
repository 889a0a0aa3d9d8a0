//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The route sampler calls routing through the [`Router`] trait, so an
//! application can swap in A* or a contraction hierarchy without touching the
//! sampler.  The default [`DijkstraRouter`] minimises total travel time.
//!
//! # Cost units
//!
//! Costs are accumulated in **milliseconds** (`u32`, saturating).  [`Path`]
//! exposes the total as `total_travel_secs: f64`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mt_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Nodes visited in order, origin first and destination last.
    pub nodes: Vec<NodeId>,
    /// Edges traversed in order; always `nodes.len() - 1` entries.
    pub edges: Vec<EdgeId>,
    /// Cumulative travel time in seconds.
    pub total_travel_secs: f64,
}

impl Path {
    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Compute the minimum travel-time path from `from` to `to`.
    ///
    /// `from == to` yields a single-node trivial path.  Unreachable targets
    /// yield [`SpatialError::NoRoute`].
    fn shortest_path(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph using
/// `edge_travel_ms` as cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Path> {
        dijkstra(network, from, to)
    }
}

fn dijkstra(network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Path> {
    for node in [from, to] {
        if !network.contains(node) {
            return Err(SpatialError::NodeNotFound(node));
        }
    }

    if from == to {
        return Ok(Path { nodes: vec![from], edges: vec![], total_travel_secs: 0.0 });
    }

    let n = network.node_count();
    let mut dist      = vec![u32::MAX; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap via Reverse.  NodeId as secondary key keeps tie-breaking
    // deterministic.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to, cost));
        }

        // Stale heap entry.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(network.edge_travel_ms[edge.index()]);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(
    network:   &RoadNetwork,
    prev_edge: &[EdgeId],
    from:      NodeId,
    to:        NodeId,
    total_ms:  u32,
) -> Path {
    let mut edges = Vec::new();
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        edges.push(e);
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    edges.reverse();
    nodes.reverse();
    Path {
        nodes,
        edges,
        total_travel_secs: total_ms as f64 / 1_000.0,
    }
}
