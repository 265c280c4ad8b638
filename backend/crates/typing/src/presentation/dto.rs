//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{LeaderboardEntry, TypingResult};
use crate::domain::scorer::TypingScore;

/// GET /get-text response
#[derive(Debug, Clone, Serialize)]
pub struct SampleTextResponse {
    pub text: &'static str,
}

// ============================================================================
// Calculate
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub typed_text: String,
    pub original_text: String,
    /// Elapsed seconds
    pub time_taken: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub correct_words: usize,
    pub wpm: f64,
    pub accuracy: f64,
}

impl From<TypingScore> for CalculateResponse {
    fn from(score: TypingScore) -> Self {
        Self {
            correct_words: score.correct_words,
            wpm: score.wpm,
            accuracy: score.accuracy,
        }
    }
}

// ============================================================================
// Save Result
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SaveResultRequest {
    pub wpm: f64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypingResultResponse {
    pub result_id: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}

impl From<TypingResult> for TypingResultResponse {
    fn from(result: TypingResult) -> Self {
        Self {
            result_id: result.result_id.to_string(),
            wpm: result.wpm,
            accuracy: result.accuracy,
            created_at: result.created_at,
        }
    }
}

// ============================================================================
// Leaderboard
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryResponse {
    pub user_name: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            user_name: entry.user_name,
            wpm: entry.wpm,
            accuracy: entry.accuracy,
            created_at: entry.created_at,
        }
    }
}
