use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid arguments for building a vector or opening a session.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A persisted index line could not be parsed.
    #[error("{}:{line}: {reason}", path.display())]
    Format { path: PathBuf, line: usize, reason: String },

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Vocabulary or document counts that make IDF undefined.
    #[error("domain error: {0}")]
    Domain(String),

    #[error("malformed document collection: {0}")]
    Collection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SearchError {
    pub(crate) fn format(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        SearchError::Format { path: path.into(), line, reason: reason.into() }
    }

    /// Maps `NotFound` I/O errors to [`SearchError::NotFound`] for the given path.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SearchError::NotFound(path.into())
        } else {
            SearchError::Io(err)
        }
    }
}
