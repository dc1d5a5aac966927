//! Game variants and the lifecycle contract they share.

pub mod hit_and_blow;
pub mod janken;

use crate::console::Console;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Lifecycle contract every game variant implements.
///
/// The coordinator drives each session strictly in order:
/// `configure` then `play` then `finalize`, each awaited to completion.
#[async_trait::async_trait]
pub trait Game: Send {
    /// Establishes session parameters, prompting the user as needed.
    ///
    /// Must leave the variant ready for [`Game::play`].
    async fn configure(&mut self, console: &mut dyn Console) -> Result<()>;

    /// Runs the interactive round loop until a terminal state.
    ///
    /// Invalid input is rejected and re-prompted, never accepted or
    /// treated as fatal.
    async fn play(&mut self, console: &mut dyn Console) -> Result<()>;

    /// Reports the session outcome and resets state for a fresh
    /// [`Game::configure`].
    async fn finalize(&mut self, console: &mut dyn Console) -> Result<()>;
}

/// Title of a registered game variant; key into the coordinator registry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameTitle {
    /// The number-guessing game.
    HitAndBlow,
    /// Rock-paper-scissors placeholder; not playable yet.
    Janken,
}

/// What the player chose to do after a session ends.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NextAction {
    /// Replay the same variant without re-selecting the title.
    PlayAgain,
    /// Terminate the runner.
    Exit,
}
