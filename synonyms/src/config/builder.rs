//! Configuration builder.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating SynonymsConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: SynonymsConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: SynonymsConfig::default(),
        }
    }

    /// Load a synonym dictionary into the store at startup.
    pub fn with_seed_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.store.seed_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Depth applied to depth-bounded queries that do not name one.
    pub fn with_default_max_depth(mut self, depth: usize) -> Self {
        self.config.store.default_max_depth = Some(depth);
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Configuration for development: debug logging in pretty format.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Configuration for production: info logging as JSON on stdout.
    pub fn production() -> Self {
        Self::new()
            .with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<SynonymsConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
