//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventDeskError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url).map_err(|e| {
        EventDeskError::Config(format!("Invalid API base URL: {}", e))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(EventDeskError::Config(
            format!("API base URL must be http or https, got: {}", parsed.scheme())
        ));
    }

    if config.user_agent.is_empty() {
        return Err(EventDeskError::Config(
            "User agent is required".to_string()
        ));
    }

    Ok(())
}

/// Validate session persistence configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.file_path.is_empty() {
        return Err(EventDeskError::Config(
            "Session file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
