//! Console entry point for the game runner.

use anyhow::Result;
use hit_and_blow::{GameProcedure, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with game text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("starting game runner");

    let mut procedure = GameProcedure::new(StdConsole::new());
    procedure.start().await
}
