//! Synthetic street grid for runs without a real network.
//!
//! A square grid of two-way streets centred on Berlin Mitte.  Travel times
//! follow the great-circle length of each block at a fixed street speed, so
//! shortest paths behave like shortest distances.

use mt_core::{GeoPoint, NodeId};
use mt_spatial::{RoadNetwork, RoadNetworkBuilder};

const CENTRE_LON: f64 = 13.405;
const CENTRE_LAT: f64 = 52.520;

/// Block edge length in degrees (≈ 150 m north–south).
const SPACING_DEG: f64 = 0.00135;

const STREET_SPEED_KMH: f64 = 25.0;

/// Build a `size × size` grid.
pub fn build_grid(size: usize) -> RoadNetwork {
    let mut b = RoadNetworkBuilder::with_capacity(size * size, 4 * size * size);
    let origin_lon = CENTRE_LON - SPACING_DEG * size as f64 / 2.0;
    let origin_lat = CENTRE_LAT - SPACING_DEG * size as f64 / 2.0;

    let ids: Vec<NodeId> = (0..size * size)
        .map(|i| {
            let (row, col) = (i / size, i % size);
            b.add_node(GeoPoint::new(
                origin_lon + col as f64 * SPACING_DEG,
                origin_lat + row as f64 * SPACING_DEG,
            ))
        })
        .collect();

    for row in 0..size {
        for col in 0..size {
            let here = ids[row * size + col];
            if col + 1 < size {
                let east = ids[row * size + col + 1];
                b.add_road(here, east, travel_ms(&b, here, east));
            }
            if row + 1 < size {
                let north = ids[(row + 1) * size + col];
                b.add_road(here, north, travel_ms(&b, here, north));
            }
        }
    }
    b.build()
}

fn travel_ms(b: &RoadNetworkBuilder, a: NodeId, z: NodeId) -> u32 {
    let km = b.node_pos(a).distance_km(b.node_pos(z));
    (km / STREET_SPEED_KMH * 3_600_000.0).round() as u32
}
