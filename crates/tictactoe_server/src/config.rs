//! Server bind configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Where the HTTP server listens.
///
/// Resolved in order: CLI flag, `HOST`/`PORT` environment variables, TOML
/// file, built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    port: u16,
}

#[instrument]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[instrument]
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from explicit values.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Overlays `HOST` and `PORT` as reported by `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            debug!(%host, "HOST from environment");
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|e| {
                ConfigError::new(format!("Invalid PORT {:?}: {}", port, e))
            })?;
            debug!(port = self.port, "PORT from environment");
        }
        Ok(self)
    }

    /// Overlays command-line values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Resolves the full configuration from file, process environment and
    /// command-line values.
    #[instrument]
    pub fn resolve(
        file: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base
            .with_env(|key| std::env::var(key).ok())?
            .with_overrides(host, port);
        info!(address = %config.bind_address(), "Server configuration resolved");
        Ok(config)
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = 8081").expect("write");

        let config = ServerConfig::from_file(file.path()).expect("load");
        assert_eq!(config, ServerConfig::new("0.0.0.0", 8081));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ServerConfig::from_file("/definitely/not/here.toml").expect_err("missing file");
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = \"lots\"").expect("write");
        let err = ServerConfig::from_file(file.path()).expect_err("bad toml");
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = ServerConfig::new("127.0.0.1", 3000)
            .with_env(env(&[("HOST", "10.0.0.1"), ("PORT", "7000")]))
            .expect("env");
        assert_eq!(config, ServerConfig::new("10.0.0.1", 7000));
    }

    #[test]
    fn test_bad_port_in_env() {
        let err = ServerConfig::default()
            .with_env(env(&[("PORT", "http")]))
            .expect_err("bad port");
        assert!(err.message.contains("Invalid PORT"));
    }

    #[test]
    fn test_cli_beats_env() {
        let config = ServerConfig::default()
            .with_env(env(&[("PORT", "7000")]))
            .expect("env")
            .with_overrides(Some("localhost".to_string()), Some(9000));
        assert_eq!(config.bind_address(), "localhost:9000");
    }

    #[test]
    fn test_ipv6_bind_address() {
        assert_eq!(ServerConfig::new("::", 5000).bind_address(), "[::]:5000");
    }
}
