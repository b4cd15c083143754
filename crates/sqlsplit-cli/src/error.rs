use std::io;

use sqlsplit::SplitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    Split {
        path: String,
        #[source]
        source: SplitError,
    },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
