//! Shutdown coordination.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::observability::Reporter;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still waiting for the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Spawn a task that closes `reporter` once shutdown is triggered.
    ///
    /// The reporter is also closed if the coordinator is dropped without
    /// triggering.
    pub fn close_on_shutdown(&self, reporter: Arc<dyn Reporter>) -> JoinHandle<()> {
        let mut rx = self.subscribe();
        tokio::spawn(async move {
            let _ = rx.recv().await;
            tracing::debug!("Closing observability reporter");
            reporter.close();
        })
    }

    /// Hold `reporter` until `signal` resolves, then close it.
    ///
    /// The reporter is closed even when `signal` fails; that error is
    /// returned afterwards.
    pub async fn hold_until<F>(&self, reporter: Arc<dyn Reporter>, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        let closer = self.close_on_shutdown(reporter);

        let result = signal.await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to wait for shutdown signal");
        }

        self.trigger();
        if let Err(e) = closer.await {
            tracing::error!(error = %e, "Reporter close task failed");
        }
        result
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::{LogReporter, ReporterKind};
    use tracing::Level;

    #[tokio::test]
    async fn test_close_on_trigger() {
        let shutdown = Shutdown::new();
        let reporter = Arc::new(LogReporter::new("livekit", Level::INFO));

        let handle = shutdown.close_on_shutdown(reporter.clone());
        assert_eq!(shutdown.receiver_count(), 1);
        assert!(!reporter.is_closed());

        shutdown.trigger();
        handle.await.unwrap();

        assert!(reporter.is_closed());
        assert_eq!(reporter.room().kind(), ReporterKind::Disabled);
    }

    #[tokio::test]
    async fn test_close_on_drop() {
        let shutdown = Shutdown::new();
        let reporter = Arc::new(LogReporter::new("livekit", Level::INFO));

        let handle = shutdown.close_on_shutdown(reporter.clone());
        drop(shutdown);
        handle.await.unwrap();

        assert!(reporter.is_closed());
    }

    #[tokio::test]
    async fn test_hold_until_signal() {
        let shutdown = Shutdown::new();
        let reporter = Arc::new(LogReporter::new("livekit", Level::INFO));

        shutdown
            .hold_until(reporter.clone(), async { Ok(()) })
            .await
            .unwrap();

        assert!(reporter.is_closed());
    }

    #[tokio::test]
    async fn test_hold_until_closes_on_signal_error() {
        let shutdown = Shutdown::new();
        let reporter = Arc::new(LogReporter::new("livekit", Level::INFO));

        let result = shutdown
            .hold_until(reporter.clone(), async {
                Err(std::io::Error::other("no signal handler"))
            })
            .await;

        assert_eq!(result.unwrap_err().to_string(), "no signal handler");
        assert!(reporter.is_closed());
        assert_eq!(reporter.agent().kind(), ReporterKind::Disabled);
    }
}
