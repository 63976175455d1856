//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PlatformError, Result};
use super::{Settings, StoreBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_catalog_config(&settings.catalog)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(PlatformError::Config(
            "Server host is required".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.backend == StoreBackend::Memory {
        return Ok(());
    }

    if config.url.is_empty() {
        return Err(PlatformError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(PlatformError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(PlatformError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(PlatformError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PlatformError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PlatformError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.directory.as_deref(), Some("")) {
        return Err(PlatformError::Config(
            "Log directory must not be empty when set".to_string()
        ));
    }

    Ok(())
}

/// Validate catalog defaults
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.default_max_users_in_group < 1 {
        return Err(PlatformError::Config(
            "Default max users in group must be at least 1".to_string()
        ));
    }

    if config.default_min_users_in_group < 1
        || config.default_min_users_in_group > config.default_max_users_in_group
    {
        return Err(PlatformError::Config(
            "Default min users in group must be between 1 and the default max".to_string()
        ));
    }

    if config.max_page_size < 1 {
        return Err(PlatformError::Config(
            "Max page size must be at least 1".to_string()
        ));
    }

    Ok(())
}
