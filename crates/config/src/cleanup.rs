use serde::{Deserialize, Serialize};
use scopedir_errors::ConfigError;
use std::fmt;
use std::str::FromStr;

/// What happens to a managed directory when its handle is cleaned up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cleanup {
    /// Always remove the directory
    #[default]
    Always,
    /// Remove the directory unless the owning scope failed
    #[serde(alias = "on_success")]
    OnSuccess,
    /// Never remove the directory
    Never,
}

impl fmt::Display for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::OnSuccess => f.write_str("on-success"),
            Self::Never => f.write_str("never"),
        }
    }
}

impl FromStr for Cleanup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "on-success" | "on_success" | "onsuccess" => Ok(Self::OnSuccess),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::InvalidValue {
                field: "cleanup".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
