//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build reporter
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Close reporter → Exit
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
