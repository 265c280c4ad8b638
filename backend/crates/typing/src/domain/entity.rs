//! Typing Result Entity

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{TypingResultId, UserId};

/// One scored attempt, owned by exactly one user. Never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingResult {
    pub result_id: TypingResultId,
    pub user_id: UserId,
    pub wpm: f64,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}

impl TypingResult {
    /// Rejects a negative or non-finite wpm and an accuracy outside 0..=100
    pub fn new(user_id: UserId, wpm: f64, accuracy: f64) -> AppResult<Self> {
        if !wpm.is_finite() || wpm < 0.0 {
            return Err(AppError::bad_request("wpm must be a non-negative number"));
        }
        if !accuracy.is_finite() || !(0.0..=100.0).contains(&accuracy) {
            return Err(AppError::bad_request("accuracy must be between 0 and 100"));
        }

        Ok(Self {
            result_id: TypingResultId::new(),
            user_id,
            wpm,
            accuracy,
            created_at: Utc::now(),
        })
    }
}

/// A leaderboard row: a result joined with its owner's name
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_name: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}
