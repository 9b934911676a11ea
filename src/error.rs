use std::io;

use thiserror::Error;

use crate::buffers::ComponentCount;
use crate::utils::Float;

/* Failure taxonomy for the load -> demultiplex -> analyze pipeline.
 * Every failure is reported synchronously to the caller; no retries,
 * no partial results.
 */
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("sample buffer is empty")]
    EmptyBuffer,

    #[error("component count {count} is outside the supported range [1, {max}]")]
    InvalidComponentCount {
        count: ComponentCount,
        max: ComponentCount,
    },

    #[error("sampling rate must be a positive number of hz, got {0}")]
    InvalidSamplingRate(Float),

    #[error("sample value {token:?} is not a number")]
    MalformedSample { token: String },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
