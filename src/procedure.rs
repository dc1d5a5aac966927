//! Game lifecycle coordinator.

use crate::console::{Console, select_from};
use crate::games::hit_and_blow::HitAndBlow;
use crate::games::janken::Janken;
use crate::games::{Game, GameTitle, NextAction};
use anyhow::Result;
use derive_more::{Display, Error};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// A selected title had no instance in the registry.
///
/// The registry is built from the same closed enumeration the selection
/// prompt offers, so this is an internal consistency failure, never user
/// misuse. It propagates as a fatal error.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("game '{title}' missing from registry")]
pub struct RegistryError {
    /// The title that failed to resolve.
    pub title: GameTitle,
}

/// Drives game variants through select → configure → play → finalize →
/// replay-or-exit.
pub struct GameProcedure<C: Console> {
    console: C,
    registry: HashMap<GameTitle, Box<dyn Game>>,
}

impl<C: Console> GameProcedure<C> {
    /// Creates a coordinator with the default registry: one instance per
    /// [`GameTitle`] variant, assembled once and never mutated.
    pub fn new(console: C) -> Self {
        let registry = GameTitle::iter()
            .map(|title| {
                let game: Box<dyn Game> = match title {
                    GameTitle::HitAndBlow => Box::new(HitAndBlow::new()),
                    GameTitle::Janken => Box::new(Janken::new()),
                };
                (title, game)
            })
            .collect();
        Self { console, registry }
    }

    /// Creates a coordinator over an explicit registry.
    pub fn with_registry(console: C, registry: HashMap<GameTitle, Box<dyn Game>>) -> Self {
        Self { console, registry }
    }

    /// The console, for inspection after a run.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs the runner to completion.
    ///
    /// Prompts for a title once, then loops the lifecycle on that same
    /// instance until the player chooses to exit. Returns cleanly on
    /// exit so callers own the process status.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<()> {
        let title = select_from::<GameTitle>(&mut self.console, "select a game to play").await?;
        info!(%title, "game selected");

        loop {
            let game = self.registry.get_mut(&title).ok_or_else(|| {
                warn!(%title, "selected title not registered");
                RegistryError { title }
            })?;

            game.configure(&mut self.console).await?;
            game.play(&mut self.console).await?;
            game.finalize(&mut self.console).await?;

            match select_from::<NextAction>(&mut self.console, "play again?").await? {
                NextAction::PlayAgain => {
                    info!(%title, "replaying");
                }
                NextAction::Exit => {
                    self.console.write_line("thanks for playing, goodbye").await?;
                    info!("runner exiting");
                    break;
                }
            }
        }

        Ok(())
    }
}
