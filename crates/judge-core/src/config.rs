//! Configuration loading and typed config structures for the judge.
//!
//! The configuration lives in `judge-config.yaml`. Each problem instance
//! names its dataset size class and one map file per level; relative map
//! paths are resolved against `static_dir`.
//!
//! Environment variables override the file:
//! - `JUDGE_HOST` overrides `server.host`
//! - `JUDGE_PORT` overrides `server.port`
//! - `JUDGE_STATIC_DIR` overrides `static_dir`
//! - `JUDGE_MAX_MOVEMENTS` overrides `max_movements`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use judge_types::{DatasetSize, Level};
use serde::Deserialize;
use tracing::warn;

use crate::validator::DEFAULT_MAX_MOVEMENTS;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level judge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JudgeConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Base directory for relative map paths.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Elementary moves replayed per submission before it is rejected.
    #[serde(default = "default_max_movements")]
    pub max_movements: u64,

    /// Problem instances by name.
    #[serde(default)]
    pub instances: BTreeMap<String, InstanceConfig>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            logging: LoggingConfig::default(),
            static_dir: default_static_dir(),
            max_movements: default_max_movements(),
            instances: BTreeMap::new(),
        }
    }
}

impl JudgeConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override settings with `JUDGE_*` environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override settings from any key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("JUDGE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("JUDGE_PORT") {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(err) => warn!(%port, %err, "Ignoring invalid JUDGE_PORT"),
            }
        }
        if let Some(dir) = lookup("JUDGE_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(limit) = lookup("JUDGE_MAX_MOVEMENTS") {
            match limit.trim().parse() {
                Ok(limit) => self.max_movements = limit,
                Err(err) => warn!(%limit, %err, "Ignoring invalid JUDGE_MAX_MOVEMENTS"),
            }
        }
    }

    /// Resolve a configured map path against `static_dir`.
    pub fn resolve_map_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.static_dir.join(path)
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceConfig {
    /// Dataset size class, which sets the base points.
    pub dataset: DatasetSize,

    /// Map file per level.
    #[serde(default)]
    pub maps: BTreeMap<Level, PathBuf>,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_max_movements() -> u64 {
    DEFAULT_MAX_MOVEMENTS
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = JudgeConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.max_movements, DEFAULT_MAX_MOVEMENTS);
        assert!(config.instances.is_empty());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
logging:
  level: debug
  format: json
static_dir: /srv/maps
max_movements: 5000
instances:
  unicode24:
    dataset: big
    maps:
      1: easy.txt
      3: /abs/hard.txt
"#;
        let config = JudgeConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.max_movements, 5_000);

        let instance = config.instances.get("unicode24").unwrap();
        assert_eq!(instance.dataset, DatasetSize::Big);
        assert_eq!(
            instance.maps.keys().copied().collect::<Vec<_>>(),
            vec![Level::BASIC, Level::TRAFFIC]
        );

        let easy = instance.maps.get(&Level::BASIC).unwrap();
        assert_eq!(config.resolve_map_path(easy), PathBuf::from("/srv/maps/easy.txt"));
        let hard = instance.maps.get(&Level::TRAFFIC).unwrap();
        assert_eq!(config.resolve_map_path(hard), PathBuf::from("/abs/hard.txt"));
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let config = JudgeConfig::parse("server:\n  port: 1234\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn level_zero_rejected() {
        let yaml = "instances:\n  x:\n    dataset: small\n    maps:\n      0: a.txt\n";
        assert!(JudgeConfig::parse(yaml).is_err());
    }

    #[test]
    fn overrides_apply() {
        let mut config = JudgeConfig::default();
        config.apply_overrides(|key| match key {
            "JUDGE_HOST" => Some("10.0.0.1".to_owned()),
            "JUDGE_PORT" => Some("8123".to_owned()),
            "JUDGE_STATIC_DIR" => Some("/data".to_owned()),
            "JUDGE_MAX_MOVEMENTS" => Some("250".to_owned()),
            _ => None,
        });
        assert_eq!(config.max_movements, 250);
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.static_dir, PathBuf::from("/data"));
    }

    #[test]
    fn invalid_port_override_ignored() {
        let mut config = JudgeConfig::default();
        config.apply_overrides(|key| (key == "JUDGE_PORT").then(|| "not-a-port".to_owned()));
        assert_eq!(config.server.port, 8000);
    }
}
