//! PostgreSQL implementation of RecommendationReader.
//!
//! Snapshots run in a read-only `REPEATABLE READ` transaction, so every
//! query sees the same committed state: a session end and its
//! recommendation upsert are either both visible or both absent.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::rows::{db_error, row_to_recommendation, row_to_session, SESSION_COLUMNS};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::Recommendation;
use crate::domain::workout::WorkoutSession;
use crate::ports::{RecommendationReader, RecommendationSnapshot};

const RECOMMENDATION_SQL: &str = r#"
    SELECT user_id, recommended_reps, reason, trend, updated_at
    FROM recommendations
    WHERE user_id = $1
"#;

#[derive(Clone)]
pub struct PostgresRecommendationReader {
    pool: PgPool,
}

impl PostgresRecommendationReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ended_session(
        tx: &mut Transaction<'_, Postgres>,
        user_id: UserId,
        order_by: &str,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        let sql = format!(
            "SELECT {} FROM workout_sessions WHERE user_id = $1 AND status = 'ended' \
             ORDER BY {} LIMIT 1",
            SESSION_COLUMNS, order_by
        );
        let row = sqlx::query(&sql)
            .bind(user_id.as_i64())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| db_error("Failed to fetch ended session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }
}

#[async_trait]
impl RecommendationReader for PostgresRecommendationReader {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Recommendation>, DomainError> {
        let row = sqlx::query(RECOMMENDATION_SQL)
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch recommendation", e))?;

        row.as_ref().map(row_to_recommendation).transpose()
    }

    async fn snapshot(
        &self,
        user_id: UserId,
    ) -> Result<Option<RecommendationSnapshot>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to set snapshot isolation", e))?;

        let user: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
            .bind(user_id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to check user", e))?;
        if user.is_none() {
            return Ok(None);
        }

        let recommendation = sqlx::query(RECOMMENDATION_SQL)
            .bind(user_id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to fetch recommendation", e))?
            .as_ref()
            .map(row_to_recommendation)
            .transpose()?;

        let last_ended = Self::ended_session(&mut tx, user_id, "ended_at DESC, id DESC").await?;
        let first_ended = Self::ended_session(&mut tx, user_id, "started_at ASC, id ASC").await?;

        let (ended_count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM workout_sessions WHERE user_id = $1 AND status = 'ended'",
        )
        .bind(user_id.as_i64())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to count ended sessions", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to close snapshot", e))?;

        Ok(Some(RecommendationSnapshot {
            recommendation,
            last_ended,
            first_ended,
            ended_count: ended_count.max(0) as u64,
        }))
    }
}
