//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Resolve default theme and logging settings from `ADMINDASH_*` variables.
//! - Keep lookup injectable so tests never mutate the real environment.
//!
//! # Invariants
//! - Blank or whitespace-only values are treated as unset.

use crate::logging::default_log_level;
use crate::theme::bootstrap;
use crate::theme::RegistryError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_THEME: &str = "ADMINDASH_THEME";
pub const ENV_LOG_LEVEL: &str = "ADMINDASH_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ADMINDASH_LOG_DIR";

/// Configuration failures surfaced while applying a `RenderConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Built-in themes could not be registered.
    Registry(RegistryError),
    /// Configured default theme is not registered.
    UnknownTheme { name: String, source: RegistryError },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "failed to build theme registry: {err}"),
            Self::UnknownTheme { name, .. } => {
                write!(f, "{ENV_THEME} names an unregistered theme `{name}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::UnknownTheme { source, .. } => Some(source),
        }
    }
}

/// Settings for one rendering process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub default_theme: String,
    pub log_level: String,
    /// Rotating log file directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_theme: bootstrap::THEME_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl RenderConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// missing or blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        let defaults = Self::default();
        Self {
            default_theme: value(ENV_THEME).unwrap_or(defaults.default_theme),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_THEME};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn missing_values_use_defaults() {
        let config = RenderConfig::from_lookup(|_| None);
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.default_theme, "bootstrap");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn values_are_trimmed_and_blank_values_ignored() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            (ENV_THEME, "  tabler "),
            (ENV_LOG_LEVEL, "   "),
            (ENV_LOG_DIR, "/var/log/admindash"),
        ]));
        assert_eq!(config.default_theme, "tabler");
        assert_eq!(config.log_level, RenderConfig::default().log_level);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/admindash")));
    }
}
