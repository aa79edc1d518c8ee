//! File and environment backed settings
//!
//! Loading order: built-in defaults, then the TOML file
//! (`~/.config/scopedir/config.toml` unless another path is given), then
//! `SCOPEDIR_*` environment variables. CLI flags are applied by the caller.

use serde::{Deserialize, Serialize};
use scopedir_errors::{ConfigError, Error};
use scopedir_events::LogSink;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_PREFIX, ENV_CLEANUP, ENV_LOG, ENV_PREFIX, ENV_ROOT};
use crate::{Cleanup, Config};

/// Top-level settings file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub tempdir: TempDirSettings,
}

/// `[tempdir]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TempDirSettings {
    /// Root for new directories; the OS temp directory when unset
    pub root_path: Option<PathBuf>,
    #[serde(default)]
    pub cleanup: Cleanup,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Print event lines to stdout
    #[serde(default)]
    pub log: bool,
}

impl Default for TempDirSettings {
    fn default() -> Self {
        Self {
            root_path: None,
            cleanup: Cleanup::default(),
            prefix: default_prefix(),
            log: false,
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Settings {
    /// Get the default settings file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("scopedir").join("config.toml"))
    }

    /// Load settings from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, or if it
    /// contains invalid TOML.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
                .into()
            } else {
                Error::io_with_path(&e, path)
            }
        })?;

        tracing::debug!(path = %path.display(), "loaded settings file");

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load settings from the default path, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the default file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, Error> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from `path` when given, otherwise use [`Settings::load`]
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value that cannot be parsed.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        if let Some(root) = std::env::var_os(ENV_ROOT) {
            if !root.is_empty() {
                self.tempdir.root_path = Some(PathBuf::from(root));
            }
        }

        if let Ok(cleanup) = std::env::var(ENV_CLEANUP) {
            self.tempdir.cleanup = cleanup.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_CLEANUP.to_string(),
                value: cleanup,
            })?;
        }

        if let Ok(prefix) = std::env::var(ENV_PREFIX) {
            self.tempdir.prefix = prefix;
        }

        if let Ok(log) = std::env::var(ENV_LOG) {
            self.tempdir.log = match log.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LOG.to_string(),
                        value: log,
                    }
                    .into())
                }
            };
        }

        Ok(())
    }

    /// Turn the settings into a handle configuration
    #[must_use]
    pub fn to_config(&self) -> Config {
        let mut config = Config::default()
            .with_cleanup(self.tempdir.cleanup)
            .with_prefix(self.tempdir.prefix.clone());
        if let Some(root) = &self.tempdir.root_path {
            config = config.with_root_path(root.clone());
        }
        if self.tempdir.log {
            config = config.log_to(LogSink::stdout());
        }
        config
    }
}
