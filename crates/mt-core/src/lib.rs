//! `mt-core`: foundational types for the `microtrips` trip generator.
//!
//! This crate is a dependency of every other `mt-*` crate.  It intentionally
//! has no `mt-*` dependencies and minimal external ones (`rand`, `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`, `TripId`                              |
//! | [`geo`]     | `GeoPoint` (lon, lat), haversine distance, `BoundingBox`  |
//! | [`time`]    | `DayAnchor`: maps times of day to Unix seconds           |
//! | [`rng`]     | `SampleRng` (seedable sampling RNG)                       |
//! | [`error`]   | `MtError`, `MtResult`                                     |
//!
//! # Coordinate convention
//!
//! Every coordinate in the workspace is `(lon, lat)`: `x` is longitude and
//! `y` is latitude.  Exported pairs are always `[lon, lat]`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MtError, MtResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{EdgeId, NodeId, TripId};
pub use rng::SampleRng;
pub use time::DayAnchor;
