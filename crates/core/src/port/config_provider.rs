// Configuration Provider Port
// Read-only key/value configuration, created once at startup and shared by
// reference with every handler.

use crate::error::{CoreError, Result};
use std::collections::HashMap;

/// Well-known configuration keys owned by this core.
///
/// Additional keys are opaque here and owned by individual handlers.
pub mod keys {
    /// Base URL of the queue broker (required by queue attachment).
    pub const BROKER_URL: &str = "broker.url";

    /// Compound stream name (`<namespace>/<queue>`) for the load_stream job.
    pub const STREAM_NAME: &str = "stream.name";

    /// Path to the record file the load_stream job reads from.
    pub const STREAM_SOURCE: &str = "stream.source";
}

/// Configuration lookup port.
///
/// Unknown keys return `None` explicitly; use [`ConfigProvider::require`]
/// where absence is a hard error.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Lookup that converts absence into `CoreError::MissingConfigKey`.
    fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .ok_or_else(|| CoreError::MissingConfigKey(key.to_string()))
    }
}

/// In-memory configuration, used by tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, String)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ConfigProvider for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Environment-backed configuration.
///
/// Maps `broker.url` to `SLUICE_BROKER_URL` (prefix + uppercase, `.` to `_`).
#[derive(Debug, Clone)]
pub struct EnvConfig {
    prefix: String,
}

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key.replace('.', "_")).to_uppercase()
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new("SLUICE")
    }
}

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.var_name(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_lookup() {
        let config: MapConfig =
            [(keys::BROKER_URL.to_string(), "http://broker:9000".to_string())]
                .into_iter()
                .collect();

        assert_eq!(
            config.get(keys::BROKER_URL).as_deref(),
            Some("http://broker:9000")
        );
        assert_eq!(config.get("does.not.exist"), None);
    }

    #[test]
    fn test_require_missing_key() {
        let config = MapConfig::default();
        let err = config.require(keys::BROKER_URL).unwrap_err();
        assert!(matches!(err, CoreError::MissingConfigKey(_)));
        assert!(err.to_string().contains("broker.url"));
    }

    #[test]
    fn test_env_var_name_mapping() {
        let config = EnvConfig::default();
        assert_eq!(config.var_name(keys::BROKER_URL), "SLUICE_BROKER_URL");
        assert_eq!(config.var_name(keys::STREAM_NAME), "SLUICE_STREAM_NAME");
    }
}
