use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::EventLevel;

/// Lifecycle events of a managed directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TempDirEvent {
    /// Directory was created on disk
    Created { path: PathBuf },

    /// Directory could not be created
    CreationFailed { path: PathBuf, error: String },

    /// Cleanup ran but the policy kept the directory
    Kept { path: PathBuf },

    /// Directory and its contents were removed
    Removed { path: PathBuf },

    /// Recursive removal failed
    RemovalFailed { path: PathBuf, error: String },
}

impl TempDirEvent {
    /// Path the event refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path }
            | Self::CreationFailed { path, .. }
            | Self::Kept { path }
            | Self::Removed { path }
            | Self::RemovalFailed { path, .. } => path,
        }
    }

    /// Underlying error text for the failure kinds
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::CreationFailed { error, .. } | Self::RemovalFailed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Severity used for tracing and event metadata
    #[must_use]
    pub fn level(&self) -> EventLevel {
        match self {
            Self::CreationFailed { .. } | Self::RemovalFailed { .. } => EventLevel::Warn,
            Self::Created { .. } | Self::Kept { .. } | Self::Removed { .. } => EventLevel::Debug,
        }
    }
}

impl fmt::Display for TempDirEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { path } => write!(f, "TempDir create '{}'", path.display()),
            Self::CreationFailed { path, error } => write!(
                f,
                "TempDir creation of '{}' failed. Error: {error}",
                path.display()
            ),
            Self::Kept { path } => write!(f, "TempDir keep '{}'", path.display()),
            Self::Removed { path } => write!(f, "TempDir remove '{}'", path.display()),
            Self::RemovalFailed { path, error } => write!(
                f,
                "TempDir removal of '{}' failed. Error: {error}",
                path.display()
            ),
        }
    }
}

/// An event together with the metadata captured when it was emitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub meta: crate::EventMeta,
    pub event: TempDirEvent,
}

impl EventMessage {
    /// Build a message, deriving the level from the event itself
    #[must_use]
    pub fn from_event(event: TempDirEvent) -> Self {
        let mut meta = crate::EventMeta::new(event.level());
        if let Some(name) = event.path().file_name() {
            meta = meta.with_correlation_id(name.to_string_lossy());
        }
        Self { meta, event }
    }
}
