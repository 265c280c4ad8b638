//! In-memory typing result repository for tests

use std::collections::HashMap;

use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use tokio::sync::Mutex;

use crate::domain::entity::{LeaderboardEntry, TypingResult};
use crate::domain::leaderboard::Leaderboard;
use crate::domain::repository::TypingResultRepository;

/// Results of users without a registered name are left out, like the
/// `JOIN users` of the SQL query
#[derive(Default)]
pub struct InMemoryTypingResultRepository {
    results: Mutex<Vec<TypingResult>>,
    user_names: Mutex<HashMap<UserId, String>>,
}

impl InMemoryTypingResultRepository {
    pub async fn add_user(&self, user_id: UserId, user_name: &str) {
        self.user_names
            .lock()
            .await
            .insert(user_id, user_name.to_string());
    }
}

impl TypingResultRepository for InMemoryTypingResultRepository {
    async fn create(&self, result: &TypingResult) -> AppResult<()> {
        self.results.lock().await.push(result.clone());
        Ok(())
    }

    async fn top_by_wpm(&self, limit: usize) -> AppResult<Vec<LeaderboardEntry>> {
        let user_names = self.user_names.lock().await;
        let entries = self
            .results
            .lock()
            .await
            .iter()
            .filter_map(|r| {
                user_names.get(&r.user_id).map(|name| LeaderboardEntry {
                    user_name: name.clone(),
                    wpm: r.wpm,
                    accuracy: r.accuracy,
                    created_at: r.created_at,
                })
            })
            .collect();

        Ok(Leaderboard::rank(entries, limit).into_entries())
    }
}
