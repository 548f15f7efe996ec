//! Room-domain reporting.
//!
//! # Responsibilities
//! - Define the room event vocabulary
//! - Define the `RoomReporter` capability
//! - Ship the disabled and log variants

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::Level;

use crate::observability::logging::event_at;
use crate::observability::ReporterKind;

/// Kind of media carried by a published track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Video,
    Data,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Video => write!(f, "video"),
            TrackKind::Data => write!(f, "data"),
        }
    }
}

/// Something that happened in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    RoomStarted {
        room: String,
    },
    RoomEnded {
        room: String,
        duration: Duration,
    },
    ParticipantJoined {
        room: String,
        participant: String,
    },
    ParticipantLeft {
        room: String,
        participant: String,
        duration: Duration,
    },
    TrackPublished {
        room: String,
        participant: String,
        kind: TrackKind,
    },
}

impl RoomEvent {
    /// Stable snake_case event name.
    pub fn name(&self) -> &'static str {
        match self {
            RoomEvent::RoomStarted { .. } => "room_started",
            RoomEvent::RoomEnded { .. } => "room_ended",
            RoomEvent::ParticipantJoined { .. } => "participant_joined",
            RoomEvent::ParticipantLeft { .. } => "participant_left",
            RoomEvent::TrackPublished { .. } => "track_published",
        }
    }

    /// Room the event belongs to.
    pub fn room(&self) -> &str {
        match self {
            RoomEvent::RoomStarted { room }
            | RoomEvent::RoomEnded { room, .. }
            | RoomEvent::ParticipantJoined { room, .. }
            | RoomEvent::ParticipantLeft { room, .. }
            | RoomEvent::TrackPublished { room, .. } => room,
        }
    }
}

impl fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomEvent::RoomStarted { room } => write!(f, "room {room} started"),
            RoomEvent::RoomEnded { room, duration } => {
                write!(f, "room {room} ended after {duration:?}")
            }
            RoomEvent::ParticipantJoined { room, participant } => {
                write!(f, "participant {participant} joined room {room}")
            }
            RoomEvent::ParticipantLeft {
                room,
                participant,
                duration,
            } => write!(f, "participant {participant} left room {room} after {duration:?}"),
            RoomEvent::TrackPublished {
                room,
                participant,
                kind,
            } => write!(f, "participant {participant} published {kind} track in room {room}"),
        }
    }
}

/// Room-domain observability capability.
pub trait RoomReporter: Send + Sync + fmt::Debug {
    /// Record one room event.
    fn report(&self, event: RoomEvent);

    /// Which variant this reporter is.
    fn kind(&self) -> ReporterKind;

    fn is_enabled(&self) -> bool {
        self.kind() != ReporterKind::Disabled
    }
}

/// Room reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRoomReporter;

impl RoomReporter for NoopRoomReporter {
    #[inline(always)]
    fn report(&self, _event: RoomEvent) {}

    fn kind(&self) -> ReporterKind {
        ReporterKind::Disabled
    }
}

/// Build the disabled room reporter.
pub fn new_noop_reporter() -> Arc<dyn RoomReporter> {
    Arc::new(NoopRoomReporter)
}

/// Room reporter that writes each event to the process log.
#[derive(Debug, Clone)]
pub struct LogRoomReporter {
    project: String,
    level: Level,
}

impl LogRoomReporter {
    pub fn new(project: impl Into<String>, level: Level) -> Self {
        Self {
            project: project.into(),
            level,
        }
    }
}

impl RoomReporter for LogRoomReporter {
    fn report(&self, event: RoomEvent) {
        event_at!(
            self.level,
            project = %self.project,
            domain = "room",
            event = event.name(),
            room = %event.room(),
            "{}",
            event
        );
    }

    fn kind(&self) -> ReporterKind {
        ReporterKind::Log
    }
}
