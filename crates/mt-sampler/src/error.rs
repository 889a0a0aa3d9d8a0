use thiserror::Error;

use mt_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("cannot sample routes from an empty network")]
    EmptyNetwork,

    #[error(
        "graph too sparse to sample: accepted {accepted} of {requested} routes \
         after {attempts} attempts"
    )]
    GraphTooSparse {
        accepted:  usize,
        requested: usize,
        attempts:  usize,
    },

    #[error("route needs at least 2 coordinates, got {0}")]
    TooFewPoints(usize),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SamplerResult<T> = Result<T, SamplerError>;
