//! Parquet output backend (feature `parquet`).
//!
//! Writes the velocity layer to `trip_points.parquet`, one row group per
//! [`write_trips`](TripWriter::write_trips) call.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, Int64Builder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use mt_trace::Trip;

use crate::writer::TripWriter;
use crate::{OutputResult, trip_points};

fn point_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("trip_id",      DataType::UInt32,  false),
        Field::new("lon",          DataType::Float64, false),
        Field::new("lat",          DataType::Float64, false),
        Field::new("time",         DataType::Int64,   false),
        Field::new("velocity_kmh", DataType::Float64, false),
    ]))
}

/// Writes the per-point velocity layer to Parquet.
///
/// `finish()` **must** be called to write the file footer; files written
/// without it cannot be opened by Parquet readers.
pub struct ParquetWriter {
    points: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl ParquetWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let schema = point_schema();
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let file = File::create(dir.join("trip_points.parquet"))?;
        let points = ArrowWriter::try_new(file, Arc::clone(&schema), Some(props))?;
        Ok(Self { points: Some(points), schema })
    }
}

impl TripWriter for ParquetWriter {
    fn write_trips(&mut self, trips: &[Trip]) -> OutputResult<()> {
        let rows = trip_points(trips);
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.points.as_mut() else {
            return Ok(());
        };

        let mut trip_ids   = UInt32Builder::with_capacity(rows.len());
        let mut lons       = Float64Builder::with_capacity(rows.len());
        let mut lats       = Float64Builder::with_capacity(rows.len());
        let mut times      = Int64Builder::with_capacity(rows.len());
        let mut velocities = Float64Builder::with_capacity(rows.len());

        for row in &rows {
            trip_ids.append_value(row.trip_id);
            lons.append_value(row.lon);
            lats.append_value(row.lat);
            times.append_value(row.time);
            velocities.append_value(row.velocity_kmh);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(trip_ids.finish()),
                Arc::new(lons.finish()),
                Arc::new(lats.finish()),
                Arc::new(times.finish()),
                Arc::new(velocities.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.points.take() {
            w.close()?;
        }
        Ok(())
    }
}
