use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjdocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl ProjdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjdocError::Io {
            path: path.into(),
            source,
        }
    }
}
