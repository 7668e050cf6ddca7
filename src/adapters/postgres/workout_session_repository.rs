//! PostgreSQL implementation of WorkoutSessionRepository.
//!
//! Starting a session locks the owning user row, so concurrent starts for
//! one user queue behind each other; the partial unique index on active
//! sessions backs the same rule at the schema level. Logs are guarded by
//! `status = 'active'`. End locks the session row, derives the
//! recommendation from the locked copy and writes both in one transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};
use tracing::debug;

use super::rows::{db_error, is_unique_violation, row_to_session, SESSION_COLUMNS};
use crate::domain::foundation::{DomainError, Timestamp, UserId, WorkoutSessionId};
use crate::domain::recommendation::Recommendation;
use crate::domain::workout::{
    active_session_exists, not_active, owner_not_found, session_not_found,
    NewWorkoutSession, WorkoutSession,
};
use crate::ports::WorkoutSessionRepository;

/// PostgreSQL implementation of WorkoutSessionRepository.
#[derive(Clone)]
pub struct PostgresWorkoutSessionRepository {
    pool: PgPool,
}

impl PostgresWorkoutSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Explains why a guarded update touched no rows.
    async fn guard_failure(
        tx: &mut Transaction<'_, Postgres>,
        id: WorkoutSessionId,
    ) -> Result<DomainError, DomainError> {
        let row = sqlx::query("SELECT status FROM workout_sessions WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| db_error("Failed to fetch session status", e))?;

        Ok(match row {
            None => session_not_found(id),
            Some(_) => not_active(id),
        })
    }
}

#[async_trait]
impl WorkoutSessionRepository for PostgresWorkoutSessionRepository {
    async fn create(&self, session: &NewWorkoutSession) -> Result<WorkoutSession, DomainError> {
        let user_id = session.user_id();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let owner = sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock user", e))?;
        if owner.is_none() {
            return Err(owner_not_found(user_id));
        }

        let active: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM workout_sessions WHERE user_id = $1 AND status = 'active'",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to check active session", e))?;
        if let Some((active_id,)) = active {
            return Err(active_session_exists(
                user_id,
                Some(WorkoutSessionId::new(active_id)),
            ));
        }

        let row = sqlx::query(
            r#"
            INSERT INTO workout_sessions (user_id, exercise_name, assigned_reps, status, started_at)
            VALUES ($1, $2, $3, 'active', $4)
            RETURNING id
            "#,
        )
        .bind(user_id.as_i64())
        .bind(session.exercise_name())
        .bind(session.assigned_reps())
        .bind(*session.started_at().as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                active_session_exists(user_id, None)
            } else {
                db_error("Failed to insert workout session", e)
            }
        })?;
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database("Failed to get id", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit workout session", e))?;

        Ok(session.clone().into_session(WorkoutSessionId::new(id)))
    }

    async fn find_by_id(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        let sql = format!("SELECT {} FROM workout_sessions WHERE id = $1", SESSION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch workout session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        let sql = format!(
            "SELECT {} FROM workout_sessions WHERE user_id = $1 AND status = 'active'",
            SESSION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch active session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn record_log(&self, session: &WorkoutSession) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let result = sqlx::query(
            "UPDATE workout_sessions SET completed_reps = $2 WHERE id = $1 AND status = 'active'",
        )
        .bind(session.id().as_i64())
        .bind(session.completed_reps())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to record exercise log", e))?;

        if result.rows_affected() == 0 {
            let err = Self::guard_failure(&mut tx, session.id()).await?;
            debug!(session_id = %session.id(), error = %err, "Log rejected by store");
            return Err(err);
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit exercise log", e))
    }

    async fn end_session(
        &self,
        id: WorkoutSessionId,
        ended_at: Timestamp,
    ) -> Result<(WorkoutSession, Recommendation), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // Row lock: a concurrent log either committed before this read or
        // waits and then fails its `status = 'active'` guard.
        let sql = format!(
            "SELECT {} FROM workout_sessions WHERE id = $1 FOR UPDATE",
            SESSION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock workout session", e))?;
        let mut session = match row {
            Some(row) => row_to_session(&row)?,
            None => return Err(session_not_found(id)),
        };

        let recommendation = match session.end(ended_at) {
            Ok(recommendation) => recommendation,
            Err(err) => {
                debug!(session_id = %id, error = %err, "End rejected by store");
                return Err(err);
            }
        };

        sqlx::query("UPDATE workout_sessions SET status = 'ended', ended_at = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(*ended_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to end workout session", e))?;

        let updated_at = recommendation
            .updated_at()
            .map(|t| *t.as_datetime())
            .unwrap_or(*ended_at.as_datetime());
        sqlx::query(
            r#"
            INSERT INTO recommendations (user_id, recommended_reps, reason, trend, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                recommended_reps = EXCLUDED.recommended_reps,
                reason = EXCLUDED.reason,
                trend = EXCLUDED.trend,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(recommendation.user_id().as_i64())
        .bind(recommendation.recommended_reps())
        .bind(recommendation.reason())
        .bind(recommendation.trend().as_str())
        .bind(updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to store recommendation", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit workout end", e))?;

        Ok((session, recommendation))
    }
}
