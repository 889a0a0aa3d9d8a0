//! The `Trip` record: a densified route with per-point timestamps.

use mt_core::{GeoPoint, TripId};

/// A densified route with one Unix timestamp per point.
///
/// Invariants (upheld by [`TraceTransformer`](crate::TraceTransformer)):
/// `timestamps.len() == coordinates.len()` and timestamps never decrease.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub id:        TripId,
    /// Index of the input route this trip was generated from.
    pub source_row: usize,
    /// Partition of the scheme the trip's start time was drawn from.
    pub partition: usize,
    coordinates:   Vec<GeoPoint>,
    length_km:     f64,
    timestamps:    Vec<i64>,
}

impl Trip {
    pub(crate) fn new(
        id:          TripId,
        source_row:  usize,
        partition:   usize,
        coordinates: Vec<GeoPoint>,
        length_km:   f64,
        timestamps:  Vec<i64>,
    ) -> Self {
        debug_assert_eq!(coordinates.len(), timestamps.len());
        Self { id, source_row, partition, coordinates, length_km, timestamps }
    }

    /// Densified points, `[lon, lat]` order.
    pub fn coordinates(&self) -> &[GeoPoint] {
        &self.coordinates
    }

    /// Length of the source route in kilometres.
    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    /// Unix seconds at which each point is reached.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn start_time(&self) -> i64 {
        self.timestamps[0]
    }

    pub fn end_time(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// `(point, timestamp)` pairs in travel order.
    pub fn points(&self) -> impl Iterator<Item = (GeoPoint, i64)> + '_ {
        self.coordinates.iter().copied().zip(self.timestamps.iter().copied())
    }
}
