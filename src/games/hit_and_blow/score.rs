//! Round scoring.

use super::guess::Guess;
use super::types::Secret;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Score {
    /// Positions where guess and secret agree.
    hit: usize,
    /// Guess digits present in the secret at a different position.
    blow: usize,
}

impl Score {
    /// Scores `guess` against `secret`.
    ///
    /// Blow counting is a plain membership test against the whole secret.
    /// That is equivalent to a consuming multiset comparison only because
    /// both sequences are validated to hold pairwise-distinct digits;
    /// the distinctness checks are a precondition of correctness here,
    /// not a cosmetic input rule.
    #[instrument(skip(secret))]
    pub fn of(secret: &Secret, guess: &Guess) -> Self {
        let mut hit = 0;
        let mut blow = 0;
        for (i, digit) in guess.digits().iter().enumerate() {
            if secret.digits()[i] == *digit {
                hit += 1;
            } else if secret.contains(*digit) {
                blow += 1;
            }
        }
        Self { hit, blow }
    }

    /// Whether this score wins a round against a secret of `secret_len`.
    pub fn is_win(&self, secret_len: usize) -> bool {
        self.hit == secret_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hit_and_blow::Digit;

    fn secret_123() -> Secret {
        let digits = ['1', '2', '3']
            .into_iter()
            .map(|c| Digit::from_char(c).unwrap())
            .collect();
        Secret::from_digits(digits).expect("distinct digits")
    }

    #[test]
    fn test_partial_match_counts_hits_and_blows() {
        let secret = secret_123();
        let guess = Guess::parse("1,3,2", 3).unwrap();
        let score = Score::of(&secret, &guess);
        assert_eq!(*score.hit(), 1);
        assert_eq!(*score.blow(), 2);
        assert!(!score.is_win(secret.len()));
    }

    #[test]
    fn test_exact_match_is_a_win() {
        let secret = secret_123();
        let guess = Guess::parse("1,2,3", 3).unwrap();
        let score = Score::of(&secret, &guess);
        assert_eq!(*score.hit(), 3);
        assert_eq!(*score.blow(), 0);
        assert!(score.is_win(secret.len()));
    }

    #[test]
    fn test_disjoint_guess_scores_zero() {
        let secret = secret_123();
        let guess = Guess::parse("4,5,6", 3).unwrap();
        let score = Score::of(&secret, &guess);
        assert_eq!(*score.hit(), 0);
        assert_eq!(*score.blow(), 0);
    }

    #[test]
    fn test_all_blows_when_fully_rotated() {
        let secret = secret_123();
        let guess = Guess::parse("3,1,2", 3).unwrap();
        let score = Score::of(&secret, &guess);
        assert_eq!(*score.hit(), 0);
        assert_eq!(*score.blow(), 3);
    }
}
