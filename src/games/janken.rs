//! Rock-paper-scissors placeholder.
//!
//! Registered so the title appears in the selection prompt; it has no
//! game logic yet.

use crate::console::Console;
use crate::games::Game;
use anyhow::Result;
use tracing::debug;

/// Placeholder variant with no behavior.
#[derive(Debug, Default)]
pub struct Janken;

impl Janken {
    /// Creates the placeholder.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Game for Janken {
    async fn configure(&mut self, _console: &mut dyn Console) -> Result<()> {
        debug!("janken has nothing to configure");
        Ok(())
    }

    async fn play(&mut self, console: &mut dyn Console) -> Result<()> {
        console.write_line("janken is not playable yet").await
    }

    async fn finalize(&mut self, _console: &mut dyn Console) -> Result<()> {
        Ok(())
    }
}
