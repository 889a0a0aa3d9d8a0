//! `mt-pipeline`: the full route → trip pipeline behind one config.
//!
//! ```text
//! RoadNetwork ──crop(bbox)──▶ RoadNetwork ──RouteSampler──▶ Vec<Route>
//!                                          ──TraceTransformer──▶ Vec<Trip>
//! ```
//!
//! [`PipelineConfig`] is plain serde data so a run can be described in a JSON
//! file; [`Pipeline::from_config`] validates it once and the resulting
//! [`Pipeline`] can be run against any number of networks.

pub mod config;
pub mod error;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use config::{PartitionConfig, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, PipelineOutput};
