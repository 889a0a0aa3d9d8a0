use thiserror::Error;

use mt_core::MtError;
use mt_sampler::SamplerError;
use mt_trace::TraceError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Geo(#[from] MtError),

    #[error("sampling failed: {0}")]
    Sampler(#[from] SamplerError),

    #[error("trace transform setup failed: {0}")]
    Trace(#[from] TraceError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
