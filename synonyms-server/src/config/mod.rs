//! Server configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_request_size: usize,

    /// Library configuration file (store and logging)
    pub config_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_request_size: 1024 * 1024, // 1MB
            config_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables
    /// CLI arguments take precedence over environment variables
    pub fn from_cli_and_env(cli_args: crate::cli::CliArgs) -> Result<Self> {
        Self::from_cli_and_lookup(cli_args, |key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_cli_and_env`] with a custom variable lookup
    pub fn from_cli_and_lookup<F>(cli_args: crate::cli::CliArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = cli_args.host {
            config.host = host;
        } else if let Some(host) = lookup("SYNONYMS_HOST") {
            config.host = host;
        }

        if let Some(port) = cli_args.port {
            config.port = port;
        } else if let Some(port) = lookup("SYNONYMS_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid SYNONYMS_PORT value '{}'", port))?;
        }

        if let Some(max_size) = cli_args.max_request_size {
            config.max_request_size = max_size;
        } else if let Some(max_size) = lookup("SYNONYMS_MAX_REQUEST_SIZE") {
            config.max_request_size = max_size.parse().with_context(|| {
                format!("Invalid SYNONYMS_MAX_REQUEST_SIZE value '{}'", max_size)
            })?;
        }

        if let Some(config_path) = cli_args.config_file {
            config.config_file = Some(config_path);
        } else if let Some(config_path) = lookup("SYNONYMS_CONFIG_FILE") {
            config.config_file = Some(PathBuf::from(config_path));
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
