//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MtError` as one variant
//! via `#[from]`, so boundary validation failures keep a single shape.

use thiserror::Error;

/// The top-level error type for `mt-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MtError {
    #[error("invalid coordinate (lon {lon}, lat {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mt-core`.
pub type MtResult<T> = Result<T, MtError>;
