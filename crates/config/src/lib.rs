#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for scopedir
//!
//! [`Config`] is the value a directory handle consumes at construction.
//! [`Settings`] is its file and environment backed counterpart used by the
//! CLI, loaded from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/scopedir/config.toml)
//! - Environment variables

pub mod cleanup;
pub mod constants;
pub mod core;
pub mod settings;

pub use cleanup::Cleanup;
pub use self::core::Config;
pub use settings::{Settings, TempDirSettings};
