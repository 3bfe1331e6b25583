//! Errors from loading sweep configurations and writing results.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error("no scenario results to export")]
    NoResults,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ExperimentResult<T> = Result<T, ExperimentError>;
