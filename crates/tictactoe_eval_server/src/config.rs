//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "EVAL_HOST";
/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "EVAL_PORT";
/// Environment variable overriding the default log filter.
pub const LOG_VAR: &str = "EVAL_LOG";

/// Configuration for the evaluation server.
///
/// Resolved in layers: defaults, then an optional TOML file, then
/// environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the HTTP listener to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    #[getter(copy)]
    port: u16,

    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read, path, e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse, path, e.to_string()))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given, then applies process environment overrides.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Applies overrides from an environment lookup.
    ///
    /// An unparsable port is ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup(HOST_VAR) {
            debug!(%host, "Host overridden from environment");
            self.host = host;
        }
        if let Some(raw) = lookup(PORT_VAR) {
            match raw.trim().parse() {
                Ok(port) => {
                    debug!(port, "Port overridden from environment");
                    self.port = port;
                }
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", PORT_VAR),
            }
        }
        if let Some(filter) = lookup(LOG_VAR) {
            self.log_filter = filter;
        }
        self
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

/// Stage at which loading a config file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("read")]
    Read,
    /// The file is not valid TOML for [`ServerConfig`].
    #[display("parse")]
    Parse,
}

/// A config file that could not be loaded.
#[derive(Debug, Clone, Display, Error, Getters)]
#[display("Failed to {kind} config file {}: {message}", path.display())]
pub struct ConfigError {
    #[getter(copy)]
    kind: ConfigErrorKind,
    path: PathBuf,
    message: String,
}

impl ConfigError {
    /// Creates an error for `path` at the given stage.
    pub fn new(
        kind: ConfigErrorKind,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}
