//! Agent-domain reporting.
//!
//! Events about agent workers and the jobs dispatched to them.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::Level;

use crate::observability::logging::event_at;
use crate::observability::ReporterKind;

/// Something that happened to an agent worker or job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    WorkerRegistered {
        worker: String,
        agent_name: String,
    },
    WorkerDeregistered {
        worker: String,
    },
    JobDispatched {
        job: String,
        room: String,
        worker: String,
    },
    JobCompleted {
        job: String,
        duration: Duration,
    },
    JobFailed {
        job: String,
        reason: String,
    },
}

impl AgentEvent {
    /// Stable snake_case event name.
    pub fn name(&self) -> &'static str {
        match self {
            AgentEvent::WorkerRegistered { .. } => "worker_registered",
            AgentEvent::WorkerDeregistered { .. } => "worker_deregistered",
            AgentEvent::JobDispatched { .. } => "job_dispatched",
            AgentEvent::JobCompleted { .. } => "job_completed",
            AgentEvent::JobFailed { .. } => "job_failed",
        }
    }
}

impl fmt::Display for AgentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentEvent::WorkerRegistered { worker, agent_name } => {
                write!(f, "worker {worker} registered agent {agent_name}")
            }
            AgentEvent::WorkerDeregistered { worker } => write!(f, "worker {worker} deregistered"),
            AgentEvent::JobDispatched { job, room, worker } => {
                write!(f, "job {job} for room {room} dispatched to worker {worker}")
            }
            AgentEvent::JobCompleted { job, duration } => {
                write!(f, "job {job} completed after {duration:?}")
            }
            AgentEvent::JobFailed { job, reason } => write!(f, "job {job} failed: {reason}"),
        }
    }
}

/// Agent-domain observability capability.
pub trait AgentReporter: Send + Sync + fmt::Debug {
    /// Record one agent event.
    fn report(&self, event: AgentEvent);

    /// Which variant this reporter is.
    fn kind(&self) -> ReporterKind;

    fn is_enabled(&self) -> bool {
        self.kind() != ReporterKind::Disabled
    }
}

/// Agent reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAgentReporter;

impl AgentReporter for NoopAgentReporter {
    #[inline(always)]
    fn report(&self, _event: AgentEvent) {}

    fn kind(&self) -> ReporterKind {
        ReporterKind::Disabled
    }
}

/// Build the disabled agent reporter.
pub fn new_noop_reporter() -> Arc<dyn AgentReporter> {
    Arc::new(NoopAgentReporter)
}

/// Agent reporter that writes each event to the process log.
#[derive(Debug, Clone)]
pub struct LogAgentReporter {
    project: String,
    level: Level,
}

impl LogAgentReporter {
    pub fn new(project: impl Into<String>, level: Level) -> Self {
        Self {
            project: project.into(),
            level,
        }
    }
}

impl AgentReporter for LogAgentReporter {
    fn report(&self, event: AgentEvent) {
        event_at!(
            self.level,
            project = %self.project,
            domain = "agent",
            event = event.name(),
            "{}",
            event
        );
    }

    fn kind(&self) -> ReporterKind {
        ReporterKind::Log
    }
}
