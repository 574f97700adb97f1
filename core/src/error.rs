use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type TraceResult<T> = Result<T, TraceError>;
