//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file yields a disabled reporter.

use serde::{Deserialize, Serialize};

use crate::observability::PROJECT;

/// Root configuration for the observability process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Reporter settings.
    pub observability: ObservabilityConfig,
}

/// Which reporter variant the composition root builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReporterMode {
    /// Every sub-reporter discards its events.
    #[default]
    Disabled,
    /// Every event is written to the process log.
    Log,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Reporter variant to build.
    pub mode: ReporterMode,

    /// Project tag attached to emitted telemetry.
    pub project: String,

    /// Subscriber filter level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Level the `log` reporter emits room and agent events at. Independent
    /// of `log_level`: events below the filter level are dropped.
    pub event_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            mode: ReporterMode::Disabled,
            project: PROJECT.to_string(),
            log_level: "info".to_string(),
            event_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.observability.mode, ReporterMode::Disabled);
        assert_eq!(config.observability.project, "livekit");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.event_level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [observability]
            mode = "log"
            log_level = "error"
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.mode, ReporterMode::Log);
        assert_eq!(config.observability.project, "livekit");
        assert_eq!(config.observability.log_level, "error");
        assert_eq!(config.observability.event_level, "info");
    }

    #[test]
    fn test_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.observability.mode, ReporterMode::Disabled);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [observability]
            mode = "otlp"
            "#,
        );
        assert!(result.is_err());
    }
}
