//! Hit and Blow: guess the secret sequence of distinct digits.
//!
//! Per round the player submits a comma-separated guess; the engine
//! reports how many digits match in place (hit) and how many are present
//! elsewhere in the secret (blow). The round loop ends when every digit
//! hits.

mod game;
mod guess;
mod score;
mod types;

pub use game::HitAndBlow;
pub use guess::{Guess, GuessError};
pub use score::Score;
pub use types::{Difficulty, Digit, Secret};
