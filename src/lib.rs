//! Hit and Blow - turn-based console game runner.
//!
//! Hosts interchangeable mini-games behind a uniform lifecycle
//! (`configure` → `play` → `finalize`) and ships a Hit and Blow
//! (Mastermind-style) number-guessing engine.
//!
//! # Architecture
//!
//! - **Console**: line-oriented I/O boundary; game logic never reads
//!   stdin directly
//! - **Games**: variants implementing the [`Game`] contract
//! - **Procedure**: coordinator that selects a variant, drives its
//!   lifecycle, and offers replay
//!
//! # Example
//!
//! ```no_run
//! use hit_and_blow::{GameProcedure, StdConsole};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut procedure = GameProcedure::new(StdConsole::new());
//! procedure.start().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod procedure;

// Crate-level exports - Console boundary
pub use console::{Console, StdConsole, select_from};

// Crate-level exports - Game contract and enumerations
pub use games::{Game, GameTitle, NextAction};

// Crate-level exports - Hit and Blow engine
pub use games::hit_and_blow::{Difficulty, Digit, Guess, GuessError, HitAndBlow, Score, Secret};

// Crate-level exports - Placeholder variant
pub use games::janken::Janken;

// Crate-level exports - Coordinator
pub use procedure::{GameProcedure, RegistryError};
