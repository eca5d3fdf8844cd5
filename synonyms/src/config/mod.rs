//! Configuration system for the synonyms library.
//!
//! Configuration is layered: built-in defaults, then a configuration file,
//! then `SYNONYMS_*` environment variables, then explicit overrides (usually
//! from the command line). The result is validated once, when loaded.

mod builder;
mod loader;
mod models;
mod validation;

use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use loader::{ConfigLoader, FileFormat};
pub use models::*;
pub use validation::validate_config;

/// Base names searched in the working directory, each tried with every
/// supported extension.
pub const CONFIG_FILE_STEMS: &[&str] = &["synonyms", ".synonyms/config"];

/// Environment variable prefix for library configuration
pub const ENV_PREFIX: &str = "SYNONYMS_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not toml, yaml, yml or json
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The merged sources do not form a valid configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Values parsed but violate a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
