//! Per-point velocity layer.

use mt_trace::Trip;

use crate::TripPointRow;

/// Flatten `trips` into one row per point.
///
/// The velocity of point `i` is the great-circle distance to point `i + 1`
/// divided by the time between them, in km/h.  Points reached at the same
/// second as their successor, and the last point of every trip, get `0.0`.
pub fn trip_points(trips: &[Trip]) -> Vec<TripPointRow> {
    let total = trips.iter().map(Trip::len).sum();
    let mut rows = Vec::with_capacity(total);

    for trip in trips {
        let coords = trip.coordinates();
        let times = trip.timestamps();
        for i in 0..trip.len() {
            let velocity_kmh = match (coords.get(i + 1), times.get(i + 1)) {
                (Some(&next), Some(&t_next)) => {
                    let dt = t_next - times[i];
                    if dt == 0 {
                        0.0
                    } else {
                        // km/s → km/h.
                        coords[i].distance_km(next) / dt as f64 * 3_600.0
                    }
                }
                _ => 0.0,
            };
            rows.push(TripPointRow {
                trip_id: trip.id.0,
                lon: coords[i].lon,
                lat: coords[i].lat,
                time: times[i],
                velocity_kmh,
            });
        }
    }
    rows
}
