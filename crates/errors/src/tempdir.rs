//! Errors raised while creating or removing a managed directory

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::Path;

use crate::UserFacingError;
use thiserror::Error;

/// Filesystem operation a [`TempDirError`] originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOperation {
    Create,
    Remove,
}

impl fmt::Display for DirOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum TempDirError {
    #[error("TempDirError: failed to {operation} '{path}': {message}")]
    DirectoryOperationFailed {
        operation: DirOperation,
        path: String,
        kind: io::ErrorKind,
        message: String,
    },
}

impl TempDirError {
    /// Wrap an `io::Error` raised while creating `path`
    #[must_use]
    pub fn creation(err: &io::Error, path: &Path) -> Self {
        Self::from_io(DirOperation::Create, err, path)
    }

    /// Wrap an `io::Error` raised while removing `path`
    #[must_use]
    pub fn removal(err: &io::Error, path: &Path) -> Self {
        Self::from_io(DirOperation::Remove, err, path)
    }

    fn from_io(operation: DirOperation, err: &io::Error, path: &Path) -> Self {
        Self::DirectoryOperationFailed {
            operation,
            path: path.display().to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Operation that failed
    #[must_use]
    pub fn operation(&self) -> DirOperation {
        match self {
            Self::DirectoryOperationFailed { operation, .. } => *operation,
        }
    }

    /// Kind of the underlying `io::Error`
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::DirectoryOperationFailed { kind, .. } => *kind,
        }
    }

    /// Message of the underlying `io::Error`
    #[must_use]
    pub fn source_message(&self) -> &str {
        match self {
            Self::DirectoryOperationFailed { message, .. } => message,
        }
    }
}

impl UserFacingError for TempDirError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self.kind() {
            io::ErrorKind::PermissionDenied => {
                Some("Check that the root directory is writable by the current user.")
            }
            io::ErrorKind::NotFound => Some("Check that the root path is valid."),
            io::ErrorKind::AlreadyExists => {
                Some("A non-directory entry is in the way; choose another root or prefix.")
            }
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            io::ErrorKind::Interrupted
                | io::ErrorKind::WouldBlock
                | io::ErrorKind::TimedOut
                | io::ErrorKind::ResourceBusy
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        match self.operation() {
            DirOperation::Create => Some("tempdir.create_failed"),
            DirOperation::Remove => Some("tempdir.remove_failed"),
        }
    }
}
