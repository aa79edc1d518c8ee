#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Scoped temporary directories
//!
//! [`TempDir`] creates a uniquely named directory (`<prefix>_<millis>_<random>`)
//! under a configurable root and removes it when the handle is dropped or
//! [`TempDir::cleanup`] is called, as allowed by its [`Cleanup`] policy:
//!
//! - `Always` removes the directory.
//! - `OnSuccess` removes it unless the owning scope failed, meaning the
//!   thread is panicking or the handle was marked failed (see
//!   [`TempDir::mark_failed`] and [`TempDir::scope`]).
//! - `Never` keeps it.
//!
//! Explicit cleanup reports removal failures as [`TempDirError`]; cleanup on
//! drop only logs them.
//!
//! ```no_run
//! use scopedir_tempdir::{Cleanup, Config, TempDir};
//!
//! let dir = TempDir::with_config(
//!     Config::default()
//!         .with_prefix("my-test")
//!         .with_cleanup(Cleanup::OnSuccess)
//!         .enable_logging(),
//! )?;
//! std::fs::write(dir.path().join("input.txt"), "Hello, world!")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dir;
pub mod filesystem;
pub mod naming;
pub mod policy;

pub use dir::{TempDir, NAME_ATTEMPTS};
pub use filesystem::{Filesystem, OsFilesystem};
pub use naming::generate_dir_name;
pub use policy::Outcome;

pub use scopedir_config::{Cleanup, Config};
pub use scopedir_errors::{DirOperation, TempDirError};
pub use scopedir_events::{EventMessage, LogSink, TempDirEvent};
