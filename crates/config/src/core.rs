//! Configuration consumed by a directory handle at construction

use scopedir_events::LogSink;
use std::path::PathBuf;

use crate::constants::DEFAULT_PREFIX;
use crate::Cleanup;

/// Everything a handle needs to know before it creates its directory.
///
/// Built with the `with_*` methods and moved into the handle, which keeps
/// it unchanged for the rest of its life.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which the managed directory is created
    pub root_path: PathBuf,
    pub cleanup: Cleanup,
    /// Leading part of the generated directory name
    pub prefix: String,
    /// Event sink; `None` disables logging
    pub logger: Option<LogSink>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: std::env::temp_dir(),
            cleanup: Cleanup::default(),
            prefix: DEFAULT_PREFIX.to_string(),
            logger: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = root_path.into();
        self
    }

    #[must_use]
    pub fn with_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = cleanup;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Log events to standard output
    #[must_use]
    pub fn enable_logging(self) -> Self {
        self.log_to(LogSink::stdout())
    }

    /// Log events through a caller-supplied function
    #[must_use]
    pub fn log_with(self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log_to(LogSink::callback(f))
    }

    #[must_use]
    pub fn log_to(mut self, sink: LogSink) -> Self {
        self.logger = Some(sink);
        self
    }
}
