//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventBookError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_admin_config(&settings.admin)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.data_dir.is_empty() {
        return Err(EventBookError::Config(
            "Storage data directory is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate admin seed configuration
fn validate_admin_config(config: &super::AdminConfig) -> Result<()> {
    if config.email.is_empty() {
        return Err(EventBookError::Config(
            "Admin email is required".to_string(),
        ));
    }

    if config.password.is_empty() {
        return Err(EventBookError::Config(
            "Admin password is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventBookError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventBookError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
