//! `mt-trace`: turn sampled routes into timestamped GPS traces.
//!
//! # Pipeline per route
//!
//! ```text
//! Route ──▶ Polyline ──▶ resample every δ km ──▶ points
//!                                                  │
//! PartitionScheme ──▶ Schedule::next(state) ──▶ start time
//!                                                  │
//!              start + k · (length / points / speed) ──▶ Trip
//! ```
//!
//! Densification is a pure function of one route.  Scheduling is a fold over
//! the routes in input order: each successfully densified route takes the next
//! slot of the current partition, and skipped rows leave the schedule state
//! untouched.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Densifies routes on Rayon's thread pool.               |

pub mod error;
pub mod partition;
pub mod polyline;
pub mod schedule;
pub mod transformer;
pub mod trip;


pub use error::{TraceError, TraceResult};
pub use partition::{Partition, PartitionScheme};
pub use polyline::Polyline;
pub use schedule::{Schedule, ScheduleState, Slot};
pub use transformer::{TraceTransformer, TransformOutput, TransformReport};
pub use trip::Trip;
