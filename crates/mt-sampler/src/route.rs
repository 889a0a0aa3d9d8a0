//! The `Route` record produced by sampling.

use mt_core::GeoPoint;
use mt_spatial::{Path, RoadNetwork};

use crate::{SamplerError, SamplerResult};

/// An ordered polyline of at least two coordinates and its great-circle
/// length.  Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    coordinates: Vec<GeoPoint>,
    length_km:   f64,
}

impl Route {
    /// Build a route from coordinates, computing `length_km` as the sum of
    /// great-circle distances between consecutive points.
    pub fn new(coordinates: Vec<GeoPoint>) -> SamplerResult<Self> {
        if coordinates.len() < 2 {
            return Err(SamplerError::TooFewPoints(coordinates.len()));
        }
        let length_km = polyline_length_m(&coordinates) / 1_000.0;
        Ok(Self { coordinates, length_km })
    }

    /// Wrap caller-supplied rows as-is, without validation or length
    /// recomputation.  The trace transformer is responsible for rejecting
    /// degenerate rows built this way.
    pub fn from_parts(coordinates: Vec<GeoPoint>, length_km: f64) -> Self {
        Self { coordinates, length_km }
    }

    /// Coordinates of every node along `path`.
    pub fn from_path(network: &RoadNetwork, path: &Path) -> SamplerResult<Self> {
        Self::new(path.nodes.iter().map(|&n| network.pos(n)).collect())
    }

    pub fn coordinates(&self) -> &[GeoPoint] {
        &self.coordinates
    }

    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Sum of pairwise great-circle distances in metres.
pub fn polyline_length_m(coords: &[GeoPoint]) -> f64 {
    coords.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
