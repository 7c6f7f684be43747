//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Scheduler engine and job type configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Name the engine instance reports in logs.
    #[serde(default = "default_instance_name")]
    pub instance_name: String,

    /// Job types accepted by create and update.
    #[serde(default = "default_builders")]
    pub builders: Vec<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            instance_name: default_instance_name(),
            builders: default_builders(),
        }
    }
}

fn default_instance_name() -> String {
    "jobhands".to_string()
}

fn default_builders() -> Vec<String> {
    vec!["generic".to_string(), "email".to_string()]
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files (default: ~/.jobhands/logs).
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Emit JSON lines on the console instead of text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.scheduler.instance_name, "jobhands");
        assert_eq!(config.scheduler.builders, vec!["generic", "email"]);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.dir.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let config: Config = toml::from_str("[scheduler]\ninstance_name = \"node-2\"").unwrap();
        assert_eq!(config.scheduler.instance_name, "node-2");
        assert_eq!(config.scheduler.builders.len(), 2);
    }
}
