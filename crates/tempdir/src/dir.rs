//! The directory handle
//!
//! A [`TempDir`] owns one freshly created directory. Construction either
//! yields a handle with an existing directory or an error and nothing to
//! clean up. Cleanup runs on `Drop` and may be requested earlier with
//! [`TempDir::cleanup`]; both follow the configured [`Cleanup`] policy.

use scopedir_config::{Cleanup, Config};
use scopedir_errors::TempDirError;
use scopedir_events::{EventEmitter, LogSink, TempDirEvent};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::filesystem::{Filesystem, OsFilesystem};
use crate::naming::generate_dir_name;
use crate::policy::{self, Decision, Outcome};

/// How many generated names are tried before giving up on `AlreadyExists`
pub const NAME_ATTEMPTS: u32 = 16;

/// Exclusively owned temporary directory.
///
/// Not `Clone`: two handles must never own the same path. Moving a handle
/// moves the cleanup obligation with it.
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
    config: Config,
    fs: Arc<dyn Filesystem>,
    marked_failed: bool,
    persisted: bool,
}

impl TempDir {
    /// Create a directory using the default configuration
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the directory cannot be created
    pub fn new() -> Result<Self, TempDirError> {
        Self::with_config(Config::default())
    }

    /// Create a directory under `root_path`
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the directory cannot be created
    pub fn in_root(root_path: impl Into<PathBuf>) -> Result<Self, TempDirError> {
        Self::with_config(Config::default().with_root_path(root_path))
    }

    /// Create a directory under `root_path` with the given cleanup policy
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the directory cannot be created
    pub fn in_root_with_cleanup(
        root_path: impl Into<PathBuf>,
        cleanup: Cleanup,
    ) -> Result<Self, TempDirError> {
        Self::with_config(
            Config::default()
                .with_root_path(root_path)
                .with_cleanup(cleanup),
        )
    }

    /// Create a directory in the OS temp directory with the given cleanup policy
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the directory cannot be created
    pub fn with_cleanup(cleanup: Cleanup) -> Result<Self, TempDirError> {
        Self::with_config(Config::default().with_cleanup(cleanup))
    }

    /// Create a directory from a full configuration
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the directory cannot be created
    pub fn with_config(config: Config) -> Result<Self, TempDirError> {
        Self::with_config_and_filesystem(config, Arc::new(OsFilesystem))
    }

    /// Create a directory from a full configuration on the given filesystem
    ///
    /// Every other constructor ends up here.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if the root cannot be resolved or
    /// created, or if the directory itself cannot be created. A
    /// `CreationFailed` event is emitted before returning.
    pub fn with_config_and_filesystem(
        config: Config,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, TempDirError> {
        let created = std::path::absolute(&config.root_path)
            .map_err(|e| (config.root_path.clone(), e))
            .and_then(|root| create_unique(fs.as_ref(), &root, &config.prefix));

        match created {
            Ok(path) => {
                config.logger.emit(TempDirEvent::Created { path: path.clone() });
                Ok(Self {
                    path,
                    config,
                    fs,
                    marked_failed: false,
                    persisted: false,
                })
            }
            Err((path, err)) => {
                config.logger.emit(TempDirEvent::CreationFailed {
                    path: path.clone(),
                    error: err.to_string(),
                });
                Err(TempDirError::creation(&err, &path))
            }
        }
    }

    /// Run `f` with a fresh directory, marking the handle failed when `f`
    /// returns `Err`.
    ///
    /// The directory is cleaned up per policy when this returns, so with
    /// [`Cleanup::OnSuccess`] it survives exactly when `f` fails. Cleanup
    /// failures at that point are logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns the construction error converted into `E`, or whatever `f`
    /// returns.
    pub fn scope<T, E, F>(config: Config, f: F) -> Result<T, E>
    where
        F: FnOnce(&TempDir) -> Result<T, E>,
        E: From<TempDirError>,
    {
        let mut dir = Self::with_config(config)?;
        let result = f(&dir);
        if result.is_err() {
            dir.mark_failed();
        }
        result
    }

    /// Absolute path of the managed directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configuration the handle was created with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn cleanup_policy(&self) -> Cleanup {
        self.config.cleanup
    }

    /// Record that the owning scope failed; [`Cleanup::OnSuccess`] then keeps
    /// the directory
    pub fn mark_failed(&mut self) {
        self.marked_failed = true;
    }

    #[must_use]
    pub fn is_marked_failed(&self) -> bool {
        self.marked_failed
    }

    /// Apply the cleanup policy now.
    ///
    /// Does nothing if the directory is already gone, so calling it again
    /// after a successful removal is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryOperationFailed` if recursive removal fails. The
    /// directory may be partially removed at that point.
    pub fn cleanup(&self) -> Result<(), TempDirError> {
        if !self.fs.exists(&self.path) {
            return Ok(());
        }

        match policy::decide(self.config.cleanup, Outcome::observe(self.marked_failed)) {
            Decision::Keep => {
                self.emit(TempDirEvent::Kept {
                    path: self.path.clone(),
                });
                Ok(())
            }
            Decision::Remove => match self.fs.remove_dir_all(&self.path) {
                Ok(()) => {
                    self.emit(TempDirEvent::Removed {
                        path: self.path.clone(),
                    });
                    Ok(())
                }
                Err(err) => {
                    self.emit(TempDirEvent::RemovalFailed {
                        path: self.path.clone(),
                        error: err.to_string(),
                    });
                    Err(TempDirError::removal(&err, &self.path))
                }
            },
        }
    }

    /// Give up ownership: the directory is left on disk and its path returned.
    ///
    /// Emits `Kept` only if the directory still exists; after an earlier
    /// removal the path is returned without another event.
    #[must_use = "the directory is no longer cleaned up; keep the path"]
    pub fn persist(mut self) -> PathBuf {
        self.persisted = true;
        if self.fs.exists(&self.path) {
            self.emit(TempDirEvent::Kept {
                path: self.path.clone(),
            });
        }
        self.path.clone()
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

impl EventEmitter for TempDir {
    fn log_sink(&self) -> Option<&LogSink> {
        self.config.logger.as_ref()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        // Already reported through the RemovalFailed event
        if let Err(err) = self.cleanup() {
            tracing::debug!(
                path = %self.path.display(),
                error = %err,
                "cleanup on drop failed, directory left in place"
            );
        }
    }
}

/// Create `root` and then an exclusively owned, freshly named child.
fn create_unique(
    fs: &dyn Filesystem,
    root: &Path,
    prefix: &str,
) -> Result<PathBuf, (PathBuf, io::Error)> {
    if let Err(err) = fs.create_dir_all(root) {
        return Err((root.to_path_buf(), err));
    }

    let mut attempt = 1;
    loop {
        let path = root.join(generate_dir_name(prefix));
        match fs.create_dir(&path) {
            Ok(()) => return Ok(path),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && attempt < NAME_ATTEMPTS => {
                tracing::trace!(path = %path.display(), attempt, "name taken, generating another");
                attempt += 1;
            }
            Err(err) => return Err((path, err)),
        }
    }
}
