//! Repository Traits

use kernel::error::app_error::AppResult;

use crate::domain::entity::{LeaderboardEntry, TypingResult};

/// Typing result repository trait
#[trait_variant::make(TypingResultRepository: Send)]
pub trait LocalTypingResultRepository {
    async fn create(&self, result: &TypingResult) -> AppResult<()>;

    /// Best results across all users, joined with the owner's user name,
    /// ordered by wpm descending with ties broken by `created_at`
    async fn top_by_wpm(&self, limit: usize) -> AppResult<Vec<LeaderboardEntry>>;
}
