//! LiveKit observability reporter library.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::Config;
pub use lifecycle::Shutdown;
pub use observability::{new_reporter, Reporter, PROJECT};
