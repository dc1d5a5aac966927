//! Guess parsing and validation.

use super::types::Digit;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a submitted guess was rejected.
///
/// Rejected guesses are reported and re-prompted; they never reach
/// scoring and never advance the attempt counter.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Token count differs from the secret length (exact match required).
    #[display("expected {expected} digits, got {actual}")]
    WrongLength {
        /// Required digit count.
        expected: usize,
        /// Digit count actually submitted.
        actual: usize,
    },
    /// A token is not a single digit from the alphabet.
    #[display("'{token}' is not a digit")]
    NotADigit {
        /// The offending token, verbatim.
        token: String,
    },
    /// The same digit appears more than once.
    #[display("digit {digit} appears more than once")]
    DuplicateDigit {
        /// The repeated digit.
        digit: Digit,
    },
}

/// A validated player guess: pairwise-distinct alphabet digits, exactly
/// as long as the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    digits: Vec<Digit>,
}

impl Guess {
    /// Parses a comma-separated line of digits.
    ///
    /// The line arrives already trimmed of surrounding whitespace; tokens
    /// are taken verbatim from the comma split with no further
    /// normalization, so interior whitespace rejects the token.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] when the token count differs from
    /// `expected_len`, a token is not a single alphabet digit, or a digit
    /// repeats.
    pub fn parse(line: &str, expected_len: usize) -> Result<Self, GuessError> {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != expected_len {
            return Err(GuessError::WrongLength {
                expected: expected_len,
                actual: tokens.len(),
            });
        }

        let mut digits = Vec::with_capacity(expected_len);
        for token in tokens {
            let mut chars = token.chars();
            let digit = match (chars.next(), chars.next()) {
                (Some(c), None) => Digit::from_char(c),
                _ => None,
            }
            .ok_or_else(|| GuessError::NotADigit {
                token: token.to_string(),
            })?;

            if digits.contains(&digit) {
                return Err(GuessError::DuplicateDigit { digit });
            }
            digits.push(digit);
        }

        Ok(Self { digits })
    }

    /// The digits in submission order.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }
}
