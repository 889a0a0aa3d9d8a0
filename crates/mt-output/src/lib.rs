//! `mt-output`: exporting generated trips.
//!
//! Two derived layers are provided for visualisation front-ends:
//!
//! - [`trip_points`]: one row per densified point with the speed over the
//!   following segment (the "velocity" layer);
//! - [`trip_layer`]: a GeoJSON `FeatureCollection` of `LineString`s whose
//!   vertices carry `[lon, lat, 0, timestamp]` (the animated trip layer).
//!
//! File backends implement [`TripWriter`]:
//!
//! | Feature   | Backend  | Files created                     |
//! |-----------|----------|-----------------------------------|
//! | *(none)*  | CSV      | `trips.csv`, `trip_points.csv`    |
//! | `parquet` | Parquet  | `trip_points.parquet`             |
//!
//! ```rust,ignore
//! let mut w = CsvWriter::new(Path::new("./out"))?;
//! w.write_trips(&trips)?;
//! w.finish()?;
//! write_trip_layer(Path::new("./out/trips.geojson"), &trips)?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod row;
pub mod velocity;
pub mod writer;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::{trip_layer, write_trip_layer};
pub use row::{TripPointRow, TripRow};
pub use velocity::trip_points;
pub use writer::TripWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
