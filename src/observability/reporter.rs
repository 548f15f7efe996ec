//! Top-level reporter and its composition root.
//!
//! # State Transitions
//! ```text
//! active → closed: close()
//! ```
//! There is no way back to `active`. Accessors keep working after close and
//! hand out disabled sub-reporters.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::Level;

use crate::config::{ObservabilityConfig, ReporterMode};
use crate::observability::agent::{self, AgentReporter, LogAgentReporter};
use crate::observability::logging::parse_level;
use crate::observability::room::{self, LogRoomReporter, RoomReporter};
use crate::observability::ReporterKind;

/// Access point to the domain-scoped sub-reporters.
pub trait Reporter: Send + Sync + fmt::Debug {
    /// Room-domain capability.
    fn room(&self) -> Arc<dyn RoomReporter>;

    /// Agent-domain capability.
    fn agent(&self) -> Arc<dyn AgentReporter>;

    /// Release held resources. Safe to call more than once.
    fn close(&self);
}

/// Reporter whose sub-reporters discard everything.
#[derive(Debug, Clone)]
pub struct DisabledReporter {
    room: Arc<dyn RoomReporter>,
    agent: Arc<dyn AgentReporter>,
}

impl DisabledReporter {
    pub fn new() -> Self {
        Self {
            room: room::new_noop_reporter(),
            agent: agent::new_noop_reporter(),
        }
    }
}

impl Default for DisabledReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for DisabledReporter {
    fn room(&self) -> Arc<dyn RoomReporter> {
        self.room.clone()
    }

    fn agent(&self) -> Arc<dyn AgentReporter> {
        self.agent.clone()
    }

    fn close(&self) {}
}

/// Reporter that logs every event until it is closed.
#[derive(Debug)]
pub struct LogReporter {
    project: String,
    room: Arc<dyn RoomReporter>,
    agent: Arc<dyn AgentReporter>,
    disabled: DisabledReporter,
    closed: AtomicBool,
}

impl LogReporter {
    pub fn new(project: impl Into<String>, level: Level) -> Self {
        let project = project.into();
        Self {
            room: Arc::new(LogRoomReporter::new(project.clone(), level)),
            agent: Arc::new(LogAgentReporter::new(project.clone(), level)),
            project,
            disabled: DisabledReporter::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Reporter for LogReporter {
    fn room(&self) -> Arc<dyn RoomReporter> {
        if self.is_closed() {
            return self.disabled.room();
        }
        self.room.clone()
    }

    fn agent(&self) -> Arc<dyn AgentReporter> {
        if self.is_closed() {
            return self.disabled.agent();
        }
        self.agent.clone()
    }

    fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::info!(project = %self.project, "Observability reporter closed");
        }
    }
}

/// Build the default reporter: both sub-reporters disabled.
pub fn new_reporter() -> Box<dyn Reporter> {
    Box::new(DisabledReporter::new())
}

/// Build the reporter selected by `config.mode`.
///
/// The log variant emits at `config.event_level`, not at the subscriber
/// filter level. Configs are validated on load; an unparseable level falls
/// back to `info`.
pub fn new_reporter_from_config(config: &ObservabilityConfig) -> Box<dyn Reporter> {
    match config.mode {
        ReporterMode::Disabled => new_reporter(),
        ReporterMode::Log => {
            let level = parse_level(&config.event_level).unwrap_or(Level::INFO);
            tracing::debug!(project = %config.project, level = %level, "Building log reporter");
            Box::new(LogReporter::new(config.project.clone(), level))
        }
    }
}

/// Variant tags of a reporter's two capabilities, in `(room, agent)` order.
pub fn reporter_kinds(reporter: &dyn Reporter) -> (ReporterKind, ReporterKind) {
    (reporter.room().kind(), reporter.agent().kind())
}
