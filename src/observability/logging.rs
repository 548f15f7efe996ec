//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide `tracing` subscriber
//! - Emit events at a level chosen at runtime
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::str::FromStr;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level {0:?}")]
    InvalidLevel(String),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Parse a configured level name (case-insensitive).
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    Level::from_str(level).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed, so call this once at startup.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?.as_str().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("livekit_observability={level},livekit_obs={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

/// `tracing::event!` wants a constant level, so dispatch on the runtime one.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            ::tracing::Level::ERROR => ::tracing::event!(::tracing::Level::ERROR, $($arg)+),
            ::tracing::Level::WARN => ::tracing::event!(::tracing::Level::WARN, $($arg)+),
            ::tracing::Level::INFO => ::tracing::event!(::tracing::Level::INFO, $($arg)+),
            ::tracing::Level::DEBUG => ::tracing::event!(::tracing::Level::DEBUG, $($arg)+),
            ::tracing::Level::TRACE => ::tracing::event!(::tracing::Level::TRACE, $($arg)+),
        }
    };
}

pub(crate) use event_at;

/// Test helper recording every event emitted inside a closure.
#[cfg(test)]
pub(crate) mod capture {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// One captured event: its level and its fields in recording order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Record {
        pub level: Level,
        pub fields: Vec<(String, String)>,
    }

    impl Record {
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    #[derive(Default)]
    struct FieldVisitor(Vec<(String, String)>);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        records: Arc<Mutex<Vec<Record>>>,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.records.lock().unwrap().push(Record {
                level: *event.metadata().level(),
                fields: visitor.0,
            });
        }
    }

    /// Run `f` with a capturing subscriber as the thread default.
    pub fn capture<F: FnOnce()>(f: F) -> Vec<Record> {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, f);
        let records = layer.records.lock().unwrap().clone();
        records
    }
}
