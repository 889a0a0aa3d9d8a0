use thiserror::Error;

use mt_core::MtError;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace configuration error: {0}")]
    Config(String),

    #[error("route has {0} coordinate(s); at least 2 are needed to form a line")]
    DegenerateRoute(usize),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Coordinate(#[from] MtError),

    #[error("every partition quota is already filled")]
    Unscheduled,
}

pub type TraceResult<T> = Result<T, TraceError>;
