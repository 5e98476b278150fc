use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HistError>;

#[derive(Debug, Error)]
pub enum HistError {
    #[error("File does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("shape mismatch: {scaled} scaled values vs {counts} counts")]
    ShapeMismatch { scaled: usize, counts: usize },

    #[error("unknown scale method: {0} (expected log, max or minmax)")]
    UnknownScaleMethod(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
