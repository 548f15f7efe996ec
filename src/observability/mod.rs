//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Composition root (reporter.rs):
//!     new_reporter() / new_reporter_from_config()
//!     → Reporter
//!
//! Callers:
//!     reporter.room()  → room.rs  (RoomReporter: room/participant/track events)
//!     reporter.agent() → agent.rs (AgentReporter: worker/job events)
//!     reporter.close() at shutdown
//!
//! Variants:
//!     disabled → events discarded
//!     log      → events written through logging.rs
//! ```
//!
//! # Design Decisions
//! - The default factory always returns the disabled variant
//! - Nothing on the reporter surface can fail
//! - Sub-reporters are shared `Arc` handles, safe to use from any thread

pub mod agent;
pub mod logging;
pub mod reporter;
pub mod room;

pub use agent::{AgentEvent, AgentReporter};
pub use reporter::{new_reporter, new_reporter_from_config, DisabledReporter, LogReporter, Reporter};
pub use room::{RoomEvent, RoomReporter, TrackKind};

/// Project name used to tag emitted telemetry.
pub const PROJECT: &str = "livekit";

/// Which implementation backs a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReporterKind {
    /// Operations do nothing.
    Disabled,
    /// Operations write to the process log.
    Log,
}

impl std::fmt::Display for ReporterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReporterKind::Disabled => write!(f, "disabled"),
            ReporterKind::Log => write!(f, "log"),
        }
    }
}
