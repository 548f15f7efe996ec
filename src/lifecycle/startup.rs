//! Startup orchestration.
//!
//! Load config, validate, then build the reporter. Any error is fatal.

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_config, Config, ConfigError};
use crate::observability::{new_reporter_from_config, Reporter};

/// Everything the process holds for its lifetime.
pub struct Startup {
    pub config: Config,
    pub reporter: Arc<dyn Reporter>,
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

/// Build the reporter for a loaded config.
pub fn build(config: Config) -> Startup {
    let reporter: Arc<dyn Reporter> = Arc::from(new_reporter_from_config(&config.observability));
    tracing::info!(
        mode = ?config.observability.mode,
        project = %config.observability.project,
        "Observability reporter ready"
    );
    Startup { config, reporter }
}
