//! Filesystem operations a handle depends on

use std::fmt::Debug;
use std::io;
use std::path::Path;

/// The four filesystem primitives a [`TempDir`](crate::TempDir) drives.
///
/// [`OsFilesystem`] forwards to `std::fs`. Other implementations exist to
/// inject failures or observe calls.
pub trait Filesystem: Send + Sync + Debug {
    /// Create directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a single directory; fails with `AlreadyExists` if anything is
    /// already at `path`
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove directory and all contents
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// `std::fs` backed filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling entry still counts as present
        std::fs::symlink_metadata(path).is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }
}
