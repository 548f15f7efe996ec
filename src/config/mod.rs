//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Config (validated, immutable)
//!     → observability::new_reporter_from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; an empty file means "disabled"
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{Config, ObservabilityConfig, ReporterMode};
pub use validation::ValidationError;
