use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
    #[error("Failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl CombineError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Read {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Write {
            path: path.into(),
            source,
        }
    }
}
