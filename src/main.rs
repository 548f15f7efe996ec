//! LiveKit observability host.
//!
//! Holds a reporter for the process lifetime and closes it on shutdown.
//!
//! ```text
//! config (TOML) → startup → Reporter ─┬─ room()  → RoomReporter
//!                                      ├─ agent() → AgentReporter
//!                  SIGINT/SIGTERM ─────┴─ close()
//! ```

use std::path::PathBuf;

use clap::Parser;

use livekit_observability::lifecycle::{signals, startup, Shutdown};
use livekit_observability::observability::logging::init_logging;
use livekit_observability::observability::reporter::reporter_kinds;

#[derive(Parser)]
#[command(name = "livekit-obs")]
#[command(about = "Hosts the LiveKit observability reporter", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the config, print the resolved reporter and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::load(cli.config.as_deref())?;
    init_logging(&config.observability.log_level)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        "livekit-obs starting"
    );

    let host = startup::build(config);
    let (room, agent) = reporter_kinds(host.reporter.as_ref());

    if cli.check {
        println!("project: {}", host.config.observability.project);
        println!("room reporter: {room}");
        println!("agent reporter: {agent}");
        host.reporter.close();
        return Ok(());
    }

    let shutdown = Shutdown::new();
    shutdown
        .hold_until(host.reporter.clone(), signals::wait_for_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
