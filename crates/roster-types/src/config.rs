//! Server configuration types for Roster.
//!
//! `ServerConfig` represents the top-level `config.toml` that controls the
//! listen address, the dataset location, and optional static front-end serving.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Roster service.
///
/// Loaded from `~/.roster/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// On-disk dataset to serve instead of the bundled one.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Directory with a built front-end to serve for non-API paths.
    #[serde(default)]
    pub web_dir: Option<PathBuf>,

    /// Export spans to OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub enable_otel: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: None,
            web_dir: None,
            enable_otel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.dataset_path.is_none());
        assert!(config.web_dir.is_none());
        assert!(!config.enable_otel);
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_server_config_deserialize_with_values() {
        let toml_str = r#"
host = "0.0.0.0"
port = 8080
dataset_path = "/srv/roster/characters.json"
web_dir = "/srv/roster/web"
enable_otel = true
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.dataset_path,
            Some(PathBuf::from("/srv/roster/characters.json"))
        );
        assert_eq!(config.web_dir, Some(PathBuf::from("/srv/roster/web")));
        assert!(config.enable_otel);
    }

    #[test]
    fn test_server_config_partial_override() {
        let config: ServerConfig = toml::from_str("port = 4000").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4000);
    }
}
