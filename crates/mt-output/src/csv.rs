//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `trips.csv`: one line per trip
//! - `trip_points.csv`: the velocity layer, one line per point

use std::fs::File;
use std::path::Path;

use csv::Writer;

use mt_trace::Trip;

use crate::writer::TripWriter;
use crate::{OutputResult, TripRow, trip_points};

pub struct CsvWriter {
    trips:    Writer<File>,
    points:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create both CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "trip_id",
            "source_row",
            "partition",
            "start_time",
            "end_time",
            "length_km",
            "points",
            "coordinates",
            "timestamps",
        ])?;

        let mut points = Writer::from_path(dir.join("trip_points.csv"))?;
        points.write_record(["trip_id", "lon", "lat", "time", "velocity_kmh"])?;

        Ok(Self { trips, points, finished: false })
    }
}

impl TripWriter for CsvWriter {
    fn write_trips(&mut self, trips: &[Trip]) -> OutputResult<()> {
        for trip in trips {
            let row = TripRow::from_trip(trip)?;
            self.trips.write_record(&[
                row.trip_id.to_string(),
                row.source_row.to_string(),
                row.partition.to_string(),
                row.start_time.to_string(),
                row.end_time.to_string(),
                row.length_km.to_string(),
                row.points.to_string(),
                row.coordinates,
                row.timestamps,
            ])?;
        }
        for p in trip_points(trips) {
            self.points.write_record(&[
                p.trip_id.to_string(),
                p.lon.to_string(),
                p.lat.to_string(),
                p.time.to_string(),
                p.velocity_kmh.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.points.flush()?;
        Ok(())
    }
}
