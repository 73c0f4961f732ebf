use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for a prediction run. Nothing is retried; the first error
/// aborts the run and propagates to the top level.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Reading the input file {} failed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("User event JSON handling failed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{0}")]
    RemoteCall(String),
}
