//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and catalog override from environment.
//! - Choose the catalog source the rest of core loads from.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults; they never error.
//! - Invalid values are reported with the offending variable name.

use crate::catalog::{CatalogSource, EmbeddedCatalogSource, FileCatalogSource};
use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "ITEMDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ITEMDECK_LOG_DIR";
pub const ENV_CATALOG_PATH: &str = "ITEMDECK_CATALOG_PATH";

/// Configuration error for one environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized level (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// Absolute log directory; `None` keeps file logging off.
    pub log_dir: Option<PathBuf>,
    /// Catalog JSON file replacing the embedded catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            catalog_path: None,
        }
    }
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to a value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&raw).map_err(|message| ConfigError {
                variable: ENV_LOG_LEVEL,
                message,
            })?;
        }

        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(ConfigError {
                    variable: ENV_LOG_DIR,
                    message: format!("must be an absolute path, got `{raw}`"),
                });
            }
            config.log_dir = Some(path);
        }

        config.catalog_path = catalog_path_from_lookup(&lookup);
        Ok(config)
    }

    /// Returns the catalog source selected by this configuration.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        catalog_source_for(self.catalog_path.as_deref())
    }
}

/// Reads only the catalog override, independent of the logging variables.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    catalog_path_from_lookup(|key| std::env::var(key).ok())
}

/// Reads only the catalog override through `lookup`.
pub fn catalog_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    non_blank(lookup(ENV_CATALOG_PATH)).map(PathBuf::from)
}

/// Returns the file source for `path`, or the embedded catalog when `None`.
pub fn catalog_source_for(path: Option<&Path>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(EmbeddedCatalogSource),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_path_from_lookup, CoreConfig, ENV_CATALOG_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL,
    };
    use std::path::PathBuf;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).expect("empty env should resolve");
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.catalog_source().describe(), "embedded catalog");
    }

    #[test]
    fn reads_all_variables() {
        let log_dir = std::env::temp_dir().join("itemdeck-config-test");
        let log_dir_str = log_dir.to_str().expect("temp dir should be valid UTF-8").to_string();
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, " WARNING "),
            (ENV_LOG_DIR, log_dir_str.as_str()),
            (ENV_CATALOG_PATH, "fixtures/items.json"),
        ]))
        .expect("all variables should resolve");

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(log_dir));
        assert!(config
            .catalog_source()
            .describe()
            .contains("fixtures/items.json"));
    }

    #[test]
    fn rejects_unknown_level_and_relative_log_dir() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "verbose")]))
            .expect_err("unknown level must be rejected");
        assert_eq!(err.variable, ENV_LOG_LEVEL);

        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "logs/dev")]))
            .expect_err("relative log dir must be rejected");
        assert_eq!(err.variable, ENV_LOG_DIR);
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config =
            CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "  "), (ENV_CATALOG_PATH, "")]))
                .expect("blank values should resolve");
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn catalog_path_survives_invalid_log_level() {
        let env = lookup(&[
            (ENV_LOG_LEVEL, "verbose"),
            (ENV_CATALOG_PATH, " /data/items.json "),
        ]);
        assert!(CoreConfig::from_lookup(&env).is_err());
        assert_eq!(
            catalog_path_from_lookup(&env),
            Some(PathBuf::from("/data/items.json"))
        );
    }
}
