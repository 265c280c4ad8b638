//! Save Result Use Case

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::id::UserId;

use crate::domain::entity::TypingResult;
use crate::domain::repository::TypingResultRepository;

pub struct SaveResultInput {
    pub user_id: UserId,
    pub wpm: f64,
    pub accuracy: f64,
}

pub struct SaveResultUseCase<R>
where
    R: TypingResultRepository,
{
    repo: Arc<R>,
}

impl<R> SaveResultUseCase<R>
where
    R: TypingResultRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SaveResultInput) -> AppResult<TypingResult> {
        let result = TypingResult::new(input.user_id, input.wpm, input.accuracy)?;

        self.repo.create(&result).await?;

        tracing::info!(
            result_id = %result.result_id,
            user_id = %result.user_id,
            wpm = result.wpm,
            accuracy = result.accuracy,
            "Typing result saved"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::TypingResultRepository;
    use crate::infra::memory::InMemoryTypingResultRepository;

    #[tokio::test]
    async fn test_saved_result_reaches_leaderboard() {
        let repo = Arc::new(InMemoryTypingResultRepository::default());
        let user_id = UserId::new();
        repo.add_user(user_id, "alice").await;

        let saved = SaveResultUseCase::new(repo.clone())
            .execute(SaveResultInput {
                user_id,
                wpm: 88.5,
                accuracy: 96.0,
            })
            .await
            .unwrap();
        assert_eq!(saved.user_id, user_id);

        let top = repo.top_by_wpm(10).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].user_name, "alice");
        assert_eq!(top[0].wpm, 88.5);
    }

    #[tokio::test]
    async fn test_invalid_result_not_stored() {
        let repo = Arc::new(InMemoryTypingResultRepository::default());
        let user_id = UserId::new();
        repo.add_user(user_id, "alice").await;

        let err = SaveResultUseCase::new(repo.clone())
            .execute(SaveResultInput {
                user_id,
                wpm: 80.0,
                accuracy: 140.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(repo.top_by_wpm(10).await.unwrap().is_empty());
    }
}
