//! Typing Scorer
//!
//! Compares typed text with the reference word by word, position by
//! position. Words are split on whitespace and compared exactly: no case
//! folding and no realignment after a skipped or extra word.

use kernel::error::app_error::AppError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The reference has no words, so accuracy is undefined
    #[error("Reference text has no words")]
    EmptyReference,
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::EmptyReference => AppError::unprocessable(err.to_string())
                .with_action("Please request a new text to type"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypingScore {
    pub correct_words: usize,
    /// Correct words per minute, two decimals
    pub wpm: f64,
    /// Percentage of reference words matched, two decimals
    pub accuracy: f64,
}

/// Score `typed` against `original` over `elapsed_seconds`
///
/// A zero, negative or non-finite elapsed time yields `wpm == 0`.
pub fn score(typed: &str, original: &str, elapsed_seconds: f64) -> Result<TypingScore, ScoreError> {
    let reference: Vec<&str> = original.split_whitespace().collect();
    if reference.is_empty() {
        return Err(ScoreError::EmptyReference);
    }

    let correct_words = typed
        .split_whitespace()
        .zip(reference.iter())
        .filter(|(typed, expected)| typed == *expected)
        .count();

    let wpm = if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
        correct_words as f64 / (elapsed_seconds / 60.0)
    } else {
        0.0
    };
    let accuracy = correct_words as f64 / reference.len() as f64 * 100.0;

    Ok(TypingScore {
        correct_words,
        wpm: round2(wpm),
        accuracy: round2(accuracy),
    })
}

/// Two decimals, exact halves to the even neighbour
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
