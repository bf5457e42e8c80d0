use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("Invalid extension pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}
