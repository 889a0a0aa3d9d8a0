//! Spatial-subsystem error type.

use thiserror::Error;

use mt_core::{MtError, NodeId};

/// Errors produced by `mt-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("edge references unknown node id {0}")]
    UnknownNode(i64),

    #[error("node id {0} appears more than once")]
    DuplicateNode(i64),

    #[error("edge {u} -> {v} has invalid travel time {value}")]
    InvalidTravelTime { u: i64, v: i64, value: f64 },

    #[error(transparent)]
    Geo(#[from] MtError),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
