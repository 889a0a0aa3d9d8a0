//! Unit tests for mt-output.

#[cfg(test)]
mod fixtures {
    use chrono::{NaiveDate, NaiveTime, TimeDelta};

    use mt_core::{DayAnchor, GeoPoint};
    use mt_sampler::Route;
    use mt_trace::{Partition, PartitionScheme, TraceTransformer, Trip};

    /// 2023-11-14 06:00 UTC.
    pub const SIX_AM: i64 = 1_699_941_600;

    /// `n` copies of a 1.112 km northbound route, transformed at `speed_kmh`
    /// with 0.5 km spacing into a single 06:00–08:00 window.
    pub fn trips(n: usize, speed_kmh: f64) -> Vec<Trip> {
        let scheme = PartitionScheme::new(vec![
            Partition::new(1.0, NaiveTime::from_hms_opt(6, 0, 0).unwrap(), TimeDelta::hours(2))
                .unwrap(),
        ])
        .unwrap();
        let anchor = DayAnchor::new(NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        let t = TraceTransformer::new(speed_kmh, 0.5, scheme, anchor).unwrap();
        let route = Route::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)]).unwrap();
        t.transform(&vec![route; n])
    }
}

// ── Velocity layer ────────────────────────────────────────────────────────────

#[cfg(test)]
mod velocity {
    use crate::trip_points;

    use super::fixtures::{SIX_AM, trips};

    #[test]
    fn one_row_per_point() {
        let trips = trips(4, 10.0);
        let rows = trip_points(&trips);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].trip_id, 0);
        assert_eq!(rows[3].trip_id, 1);
        assert_eq!(rows[0].time, SIX_AM);
    }

    #[test]
    fn velocity_over_following_segment() {
        let rows = trip_points(&trips(1, 10.0));
        // 0.5 km in 133 s.
        let expected = 0.5 / 133.0 * 3_600.0;
        assert!((rows[0].velocity_kmh - expected).abs() < 1e-6, "got {}", rows[0].velocity_kmh);
        assert!((rows[1].velocity_kmh - expected).abs() < 1e-6);
        assert_eq!(rows[2].velocity_kmh, 0.0, "last point has no successor");
    }

    #[test]
    fn zero_time_delta_gives_zero_velocity() {
        // Sub-second steps truncate to the same timestamp.
        let rows = trip_points(&trips(1, 10_000.0));
        assert!(rows.iter().all(|r| r.time == SIX_AM));
        assert!(rows.iter().all(|r| r.velocity_kmh == 0.0));
    }

    #[test]
    fn empty_input() {
        assert!(trip_points(&[]).is_empty());
    }
}

// ── GeoJSON layer ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod geojson {
    use crate::{trip_layer, write_trip_layer};

    use super::fixtures::{SIX_AM, trips};

    #[test]
    fn feature_per_trip_with_timed_vertices() {
        let layer = trip_layer(&trips(2, 10.0));
        assert_eq!(layer["type"], "FeatureCollection");

        let features = layer["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1]["properties"]["trip_id"], 1);
        assert_eq!(features[0]["geometry"]["type"], "LineString");

        let coords = features[0]["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], serde_json::json!([0.0, 0.0, 0, SIX_AM]));
        assert_eq!(coords[2][3], SIX_AM + 266);
    }

    #[test]
    fn written_file_parses() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("trips.geojson");
        write_trip_layer(&path, &trips(3, 10.0)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["features"].as_array().unwrap().len(), 3);
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::writer::TripWriter;

    use super::fixtures::{SIX_AM, trips};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[0], "trip_id");
        assert_eq!(headers[headers.len() - 1], "timestamps");

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_points.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["trip_id", "lon", "lat", "time", "velocity_kmh"]);
    }

    #[test]
    fn trips_and_points_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&trips(2, 10.0)).unwrap();
        w.write_trips(&trips(1, 10.0)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][3], SIX_AM.to_string()); // start_time
        assert_eq!(&rows[0][6], "3");                // points

        let ts: Vec<i64> = serde_json::from_str(&rows[0][8]).unwrap();
        assert_eq!(ts, vec![SIX_AM, SIX_AM + 133, SIX_AM + 266]);
        let coords: Vec<[f64; 2]> = serde_json::from_str(&rows[0][7]).unwrap();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], [0.0, 0.0]);

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_points.csv")).unwrap();
        assert_eq!(rdr.records().count(), 9);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Parquet backend ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use parquet::file::reader::{FileReader, SerializedFileReader};

    use crate::parquet::ParquetWriter;
    use crate::writer::TripWriter;

    use super::fixtures::trips;

    #[test]
    fn point_rows_written() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_trips(&trips(2, 10.0)).unwrap();
        w.write_trips(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("trip_points.parquet")).unwrap();
        let reader = SerializedFileReader::new(file).unwrap();
        assert_eq!(reader.metadata().file_metadata().num_rows(), 6);
    }
}
