//! Plain data rows written by output backends.

use mt_trace::Trip;

/// One trip, flattened.  Coordinates and timestamps are kept as JSON arrays
/// so a trip stays on a single CSV line.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub trip_id:     u32,
    pub source_row:  usize,
    pub partition:   usize,
    pub start_time:  i64,
    pub end_time:    i64,
    pub length_km:   f64,
    pub points:      usize,
    /// `[[lon, lat], …]`
    pub coordinates: String,
    /// `[t0, t1, …]`
    pub timestamps:  String,
}

impl TripRow {
    pub fn from_trip(trip: &Trip) -> serde_json::Result<Self> {
        let coords: Vec<[f64; 2]> = trip.coordinates().iter().map(|p| p.to_pair()).collect();
        Ok(Self {
            trip_id:     trip.id.0,
            source_row:  trip.source_row,
            partition:   trip.partition,
            start_time:  trip.start_time(),
            end_time:    trip.end_time(),
            length_km:   trip.length_km(),
            points:      trip.len(),
            coordinates: serde_json::to_string(&coords)?,
            timestamps:  serde_json::to_string(trip.timestamps())?,
        })
    }
}

/// One densified point of one trip with the speed towards the next point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripPointRow {
    pub trip_id:      u32,
    pub lon:          f64,
    pub lat:          f64,
    /// Unix seconds.
    pub time:         i64,
    pub velocity_kmh: f64,
}
