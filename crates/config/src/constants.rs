//! Built-in defaults and environment variable names

/// Prefix of generated directory names when none is configured
pub const DEFAULT_PREFIX: &str = "temp_dir";

pub const ENV_ROOT: &str = "SCOPEDIR_ROOT";
pub const ENV_CLEANUP: &str = "SCOPEDIR_CLEANUP";
pub const ENV_PREFIX: &str = "SCOPEDIR_PREFIX";
pub const ENV_LOG: &str = "SCOPEDIR_LOG";
