//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entity::{LeaderboardEntry, TypingResult};
use crate::domain::repository::TypingResultRepository;

/// PostgreSQL-backed typing result repository
#[derive(Clone)]
pub struct PgTypingResultRepository {
    pool: PgPool,
}

impl PgTypingResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TypingResultRepository for PgTypingResultRepository {
    async fn create(&self, result: &TypingResult) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO typing_results (
                result_id,
                user_id,
                wpm,
                accuracy,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(result.result_id.as_uuid())
        .bind(result.user_id.as_uuid())
        .bind(result.wpm)
        .bind(result.accuracy)
        .bind(result.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn top_by_wpm(&self, limit: usize) -> AppResult<Vec<LeaderboardEntry>> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::bad_request("Leaderboard limit out of range"))?;

        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT
                u.user_name,
                r.wpm,
                r.accuracy,
                r.created_at
            FROM typing_results r
            JOIN users u ON u.user_id = r.user_id
            ORDER BY r.wpm DESC, r.created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LeaderboardRow::into_entry).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    user_name: String,
    wpm: f64,
    accuracy: f64,
    created_at: DateTime<Utc>,
}

impl LeaderboardRow {
    fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            user_name: self.user_name,
            wpm: self.wpm,
            accuracy: self.accuracy,
            created_at: self.created_at,
        }
    }
}
