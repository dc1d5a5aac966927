//! The Hit and Blow session state machine.

use super::guess::Guess;
use super::score::Score;
use super::types::{Difficulty, Secret};
use crate::console::{Console, select_from};
use crate::games::Game;
use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

/// One Hit and Blow engine instance.
///
/// Owns the session state (difficulty, secret, attempt counter) for one
/// playthrough at a time. `finalize` resets the session, so the same
/// instance is reused across replays.
pub struct HitAndBlow {
    difficulty: Option<Difficulty>,
    secret: Option<Secret>,
    attempts: u32,
    rng: StdRng,
}

impl HitAndBlow {
    /// Creates an engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an engine with an explicit RNG, for reproducible secrets.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            difficulty: None,
            secret: None,
            attempts: 0,
            rng,
        }
    }

    /// Valid rounds scored this session, including the winning round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Difficulty of the current session, if configured.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

impl Default for HitAndBlow {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Game for HitAndBlow {
    #[instrument(skip_all)]
    async fn configure(&mut self, console: &mut dyn Console) -> Result<()> {
        let difficulty = select_from::<Difficulty>(console, "select a difficulty").await?;
        let secret = Secret::generate(difficulty.secret_len(), &mut self.rng);
        info!(%difficulty, secret_len = secret.len(), "session configured");
        self.difficulty = Some(difficulty);
        self.secret = Some(secret);
        Ok(())
    }

    #[instrument(skip_all)]
    async fn play(&mut self, console: &mut dyn Console) -> Result<()> {
        // Reaching play without a secret is a programming defect in the
        // coordinator, not a user error.
        let secret = self
            .secret
            .clone()
            .ok_or_else(|| anyhow!("play() called before configure()"))?;
        let prompt = format!(
            "enter {} distinct digits, separated by commas",
            secret.len()
        );

        loop {
            let line = console.prompt(&prompt).await?;
            let guess = match Guess::parse(&line, secret.len()) {
                Ok(guess) => guess,
                Err(error) => {
                    warn!(%error, "guess rejected");
                    console.write_line(&format!("invalid input: {error}")).await?;
                    continue;
                }
            };

            self.attempts += 1;
            let score = Score::of(&secret, &guess);
            info!(hit = score.hit(), blow = score.blow(), attempts = self.attempts, "round scored");

            if score.is_win(secret.len()) {
                break;
            }
            console
                .write_line(&format!("{} hit, {} blow", score.hit(), score.blow()))
                .await?;
        }

        Ok(())
    }

    #[instrument(skip_all)]
    async fn finalize(&mut self, console: &mut dyn Console) -> Result<()> {
        console
            .write_line(&format!("correct! attempts: {}", self.attempts))
            .await?;
        info!(attempts = self.attempts, "session finished, resetting");
        self.difficulty = None;
        self.secret = None;
        self.attempts = 0;
        Ok(())
    }
}
