//! Leaderboard Use Case

use std::sync::Arc;

use kernel::error::app_error::AppResult;

use crate::application::config::TypingConfig;
use crate::domain::leaderboard::Leaderboard;
use crate::domain::repository::TypingResultRepository;

pub struct LeaderboardUseCase<R>
where
    R: TypingResultRepository,
{
    repo: Arc<R>,
    config: Arc<TypingConfig>,
}

impl<R> LeaderboardUseCase<R>
where
    R: TypingResultRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TypingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> AppResult<Leaderboard> {
        let limit = self.config.leaderboard_size;
        let entries = self.repo.top_by_wpm(limit).await?;
        // The query already orders; ranking again pins the tie rule
        Ok(Leaderboard::rank(entries, limit))
    }
}
