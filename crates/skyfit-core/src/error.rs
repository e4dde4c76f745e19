//! Centralized error types for the skyfit application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

use skyfit_weather::{LocationError, WeatherError};

/// Top-level application error type.
///
/// All errors in the skyfit application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => weather_user_message(e),
            AppError::Location(e) => location_user_message(e),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

fn weather_user_message(error: &WeatherError) -> &'static str {
    match error {
        WeatherError::Network(e) if e.is_timeout() => {
            "The request timed out. Please try again."
        }
        WeatherError::Network(_) => "Unable to connect. Check your internet connection.",
        WeatherError::Api { status, .. } if *status >= 500 => {
            "The weather service is experiencing issues. Please try again later."
        }
        WeatherError::Api { .. } => "The weather lookup failed. Please try again.",
        WeatherError::InvalidRequest(_) => "Please enter a city and try again.",
        WeatherError::RateLimited { .. } => {
            "Too many lookups in a row. Please wait a moment and try again."
        }
        WeatherError::Location(e) => location_user_message(e),
        WeatherError::Storage(_) => "Couldn't save your weather data. Please try again.",
        WeatherError::Url(_) => "The weather service address is invalid. Check your settings.",
    }
}

fn location_user_message(error: &LocationError) -> &'static str {
    match error {
        LocationError::PermissionDenied => {
            "Location permission denied. Please enter your city manually."
        }
        LocationError::ServiceUnavailable | LocationError::Other(_) => {
            "Unable to detect your location. Please enter your city manually."
        }
        LocationError::Timeout => "Location lookup timed out. Please try again.",
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_api_messages_distinguish_server_errors() {
        let server = AppError::Weather(WeatherError::Api {
            status: 503,
            message: "unavailable".to_string(),
        });
        let client = AppError::Weather(WeatherError::Api {
            status: 400,
            message: "bad request".to_string(),
        });
        assert!(server.user_message().contains("later"));
        assert_eq!(client.user_message(), "The weather lookup failed. Please try again.");
    }

    #[test]
    fn test_location_errors_suggest_manual_entry() {
        let err = AppError::Location(LocationError::PermissionDenied);
        assert!(err.user_message().contains("manually"));
        let err = AppError::Weather(WeatherError::Location(
            LocationError::ServiceUnavailable,
        ));
        assert!(err.user_message().contains("manually"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = AppError::Config(ConfigError::ParseError("bad toml".to_string()));
        assert_eq!(
            err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }
}
