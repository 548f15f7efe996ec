//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Validation is a pure
//! function that returns every problem found, not just the first.

use thiserror::Error;

use crate::config::schema::Config;

/// Levels accepted by `observability.log_level` and `observability.event_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The project tag is empty or whitespace.
    #[error("observability.project must not be empty")]
    EmptyProject,

    /// The log level is not one of [`LOG_LEVELS`].
    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    /// The event level is not one of [`LOG_LEVELS`].
    #[error("observability.event_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownEventLevel(String),
}

fn is_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
}

/// Validate a parsed configuration.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let obs = &config.observability;

    if obs.project.trim().is_empty() {
        errors.push(ValidationError::EmptyProject);
    }

    if !is_level(&obs.log_level) {
        errors.push(ValidationError::UnknownLogLevel(obs.log_level.clone()));
    }

    if !is_level(&obs.event_level) {
        errors.push(ValidationError::UnknownEventLevel(obs.event_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = Config::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::default();
        config.observability.project = "  ".into();
        config.observability.log_level = "verbose".into();
        config.observability.event_level = "notice".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyProject,
                ValidationError::UnknownLogLevel("verbose".into()),
                ValidationError::UnknownEventLevel("notice".into()),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::UnknownLogLevel("loud".into());
        assert!(err.to_string().contains("\"loud\""));
    }
}
