//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &SynonymsConfig) -> Result<(), ConfigError> {
    validate_store_config(&config.store)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if let Some(seed_file) = &config.seed_file
        && seed_file.as_os_str().is_empty()
    {
        return Err(ConfigError::Invalid(
            "Seed file path cannot be empty".to_string(),
        ));
    }

    if config.default_max_depth == Some(0) {
        return Err(ConfigError::Invalid(
            "Default max depth must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::Invalid(
            "Log file path cannot be empty".to_string(),
        ));
    }

    if !config.stdout && config.file.is_none() {
        return Err(ConfigError::Invalid(
            "Logging needs stdout or a log file".to_string(),
        ));
    }

    Ok(())
}
