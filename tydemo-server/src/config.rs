//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file
//! (`tydemo.toml` in the working directory unless `--config` names another),
//! then `TYDEMO_*` environment variables. Command-line flags are applied on
//! top by `main`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tydemo_core::{DemoError, DemoResult};

pub const DEFAULT_CONFIG_FILE: &str = "tydemo.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Artificial delay before answering date selections. Off when absent.
    #[serde(default)]
    pub simulated_latency_ms: Option<LatencyRange>,
}

/// Inclusive bounds, in milliseconds, for a random sleep.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct LatencyRange {
    pub min: u64,
    pub max: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            simulated_latency_ms: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> DemoResult<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (DEFAULT_CONFIG_FILE.into(), false),
        };

        let config: ServerConfig = Config::builder()
            .add_source(File::from(file).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("TYDEMO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DemoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DemoError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DemoResult<()> {
        if let Some(range) = self.simulated_latency_ms {
            if range.min > range.max {
                return Err(DemoError::Config(format!(
                    "simulated_latency_ms.min ({}) is greater than max ({})",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
