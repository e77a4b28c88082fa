use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitnoteError {
    #[error(transparent)]
    Name(#[from] crate::domain::NameError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("notebook not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("notebook root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl GitnoteError {
    /// Returns `true` when the failure comes from a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        match self {
            GitnoteError::NotFound(_) => true,
            GitnoteError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            GitnoteError::Walk { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            _ => false,
        }
    }
}

pub type GitnoteResult<T> = Result<T, GitnoteError>;
