//! CSV road-network loader.
//!
//! # CSV format
//!
//! Two tables, as exported from a map-data provider's graph for a bounding
//! box.  Node ids are the provider's external ids (any `i64`); `x` is
//! longitude and `y` is latitude.
//!
//! ```csv
//! id,x,y
//! 101,13.4050,52.5200
//! 102,13.4100,52.5210
//! ```
//!
//! `travel_time` is in seconds and must be finite and non-negative.  Each row
//! is one **directed** edge; two-way streets appear once per direction.
//!
//! ```csv
//! u,v,travel_time
//! 101,102,42.5
//! 102,101,42.5
//! ```
//!
//! Extra columns (e.g. `length`, `highway`) are ignored.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use mt_core::{GeoPoint, NodeId};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{SpatialError, SpatialResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id: i64,
    x:  f64,
    y:  f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    u:           i64,
    v:           i64,
    travel_time: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoadNetwork`] from a node table and an edge table on disk.
pub fn load_network_csv(nodes: &Path, edges: &Path) -> SpatialResult<RoadNetwork> {
    let nodes_file = std::fs::File::open(nodes)?;
    let edges_file = std::fs::File::open(edges)?;
    load_network_readers(nodes_file, edges_file)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
pub fn load_network_readers<N: Read, E: Read>(nodes: N, edges: E) -> SpatialResult<RoadNetwork> {
    let mut builder = RoadNetworkBuilder::new();
    let mut ext_to_id: FxHashMap<i64, NodeId> = FxHashMap::default();

    let mut node_reader = csv::Reader::from_reader(nodes);
    for result in node_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let pos = GeoPoint::try_new(row.x, row.y)?;
        if ext_to_id.contains_key(&row.id) {
            return Err(SpatialError::DuplicateNode(row.id));
        }
        ext_to_id.insert(row.id, builder.add_node(pos));
    }

    let mut edge_reader = csv::Reader::from_reader(edges);
    for result in edge_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let from = *ext_to_id.get(&row.u).ok_or(SpatialError::UnknownNode(row.u))?;
        let to   = *ext_to_id.get(&row.v).ok_or(SpatialError::UnknownNode(row.v))?;
        builder.add_directed_edge(from, to, travel_ms(&row)?);
    }

    log::info!(
        "loaded road network: {} nodes, {} edges",
        builder.node_count(),
        builder.edge_count()
    );
    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn travel_ms(row: &EdgeRecord) -> SpatialResult<u32> {
    let ms = (row.travel_time * 1_000.0).round();
    if !row.travel_time.is_finite() || row.travel_time < 0.0 || ms > u32::MAX as f64 {
        return Err(SpatialError::InvalidTravelTime {
            u:     row.u,
            v:     row.v,
            value: row.travel_time,
        });
    }
    Ok(ms as u32)
}
