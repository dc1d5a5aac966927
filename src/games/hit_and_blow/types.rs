//! Core domain types for Hit and Blow.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// One symbol from the fixed alphabet of decimal digits `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    /// Size of the digit alphabet.
    pub const COUNT: u8 = 10;

    /// Parses a single alphabet character.
    ///
    /// Returns `None` for anything outside `'0'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Draws one uniformly random digit from the alphabet.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(0..Self::COUNT))
    }

    /// Numeric value, in `0..=9`.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty of a session; fixes the secret length.
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
pub enum Difficulty {
    /// Three-digit secret.
    Normal,
    /// Four-digit secret.
    Hard,
    /// Five-digit secret.
    VeryHard,
}

impl Difficulty {
    /// Secret length for this difficulty.
    pub fn secret_len(self) -> usize {
        match self {
            Difficulty::Normal => 3,
            Difficulty::Hard => 4,
            Difficulty::VeryHard => 5,
        }
    }
}

/// The hidden target sequence of pairwise-distinct digits.
///
/// Generated once per session during configuration and immutable until
/// the session resets. Distinctness is an invariant, not a convention:
/// scoring relies on it (see [`super::Score::of`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    digits: Vec<Digit>,
}

impl Secret {
    /// Generates a secret of `len` distinct digits by rejection sampling:
    /// uniform draws are discarded when already present, so distinctness
    /// holds without biasing the remaining draws.
    #[instrument(skip(rng))]
    pub fn generate(len: usize, rng: &mut impl Rng) -> Self {
        let mut digits = Vec::with_capacity(len);
        while digits.len() < len {
            let digit = Digit::sample(rng);
            if !digits.contains(&digit) {
                digits.push(digit);
            }
        }
        debug!(len, "secret generated");
        Self { digits }
    }

    /// Builds a secret from explicit digits.
    ///
    /// Returns `None` when the digits are not pairwise distinct, which
    /// would break the scoring equivalence.
    pub fn from_digits(digits: Vec<Digit>) -> Option<Self> {
        for (i, digit) in digits.iter().enumerate() {
            if digits[i + 1..].contains(digit) {
                return None;
            }
        }
        Some(Self { digits })
    }

    /// Number of digits in the secret.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the secret holds no digits.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The digits in order.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Whether `digit` occurs anywhere in the secret.
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }
}
