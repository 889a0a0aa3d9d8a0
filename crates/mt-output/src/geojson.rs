//! Time-animated GeoJSON trip layer.
//!
//! Each trip becomes a `LineString` feature whose vertices are
//! `[lon, lat, 0, timestamp]`, the layout trip-animation layers in common web
//! map libraries read directly.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Value, json};

use mt_trace::Trip;

use crate::OutputResult;

/// Build the `FeatureCollection` for `trips`.
pub fn trip_layer(trips: &[Trip]) -> Value {
    let features: Vec<Value> = trips
        .iter()
        .map(|trip| {
            let vertices: Vec<Value> = trip
                .points()
                .map(|(p, t)| json!([p.lon, p.lat, 0, t]))
                .collect();
            json!({
                "type": "Feature",
                "properties": {
                    "trip_id":    trip.id.0,
                    "partition":  trip.partition,
                    "length_km":  trip.length_km(),
                    "start_time": trip.start_time(),
                    "end_time":   trip.end_time(),
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": vertices,
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Write [`trip_layer`] to `path`.
pub fn write_trip_layer(path: &Path, trips: &[Trip]) -> OutputResult<()> {
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(out, &trip_layer(trips))?;
    log::info!("wrote {} trips to {}", trips.len(), path.display());
    Ok(())
}
