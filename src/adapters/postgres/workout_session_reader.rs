//! PostgreSQL implementation of WorkoutSessionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{db_error, order_sql, row_to_session, session_sort_column, SESSION_COLUMNS};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::workout::WorkoutSession;
use crate::ports::{
    Page, StatusFilter, WorkoutCounts, WorkoutListOptions, WorkoutSessionReader,
    WorkoutSortField,
};

/// Read-optimized workout session queries.
#[derive(Clone)]
pub struct PostgresWorkoutSessionReader {
    pool: PgPool,
}

impl PostgresWorkoutSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn status_clause(status: StatusFilter) -> &'static str {
    match status {
        StatusFilter::Active => " AND status = 'active'",
        StatusFilter::Ended => " AND status = 'ended'",
        StatusFilter::All => "",
    }
}

#[async_trait]
impl WorkoutSessionReader for PostgresWorkoutSessionReader {
    async fn list_by_user(
        &self,
        user_id: UserId,
        options: &WorkoutListOptions,
    ) -> Result<Page<WorkoutSession>, DomainError> {
        let filter = status_clause(options.status);

        let count_sql = format!(
            "SELECT COUNT(*) FROM workout_sessions WHERE user_id = $1{}",
            filter
        );
        let (total,): (i64,) = sqlx::query_as(&count_sql)
            .bind(user_id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count workout sessions", e))?;

        let order = order_sql(options.order);
        // Running sessions have no end time and always sort last.
        let nulls = match options.sort_by {
            WorkoutSortField::EndedAt => " NULLS LAST",
            _ => "",
        };
        let sql = format!(
            "SELECT {columns} FROM workout_sessions WHERE user_id = $1{filter} \
             ORDER BY {column} {order}{nulls}, id {order} LIMIT $2 OFFSET $3",
            columns = SESSION_COLUMNS,
            filter = filter,
            column = session_sort_column(options.sort_by),
            order = order,
            nulls = nulls,
        );

        let rows = sqlx::query(&sql)
            .bind(user_id.as_i64())
            .bind(i64::from(options.page.limit()))
            .bind(options.page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list workout sessions", e))?;

        let items = rows
            .iter()
            .map(row_to_session)
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Page::new(items, total.max(0) as u64, options.page))
    }

    async fn counts(&self, user_id: UserId) -> Result<WorkoutCounts, DomainError> {
        let (total, logged, active, ended): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE completed_reps IS NOT NULL),
                   COUNT(*) FILTER (WHERE status = 'active'),
                   COUNT(*) FILTER (WHERE status = 'ended')
            FROM workout_sessions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count workout sessions", e))?;

        Ok(WorkoutCounts {
            total: total.max(0) as u64,
            logged: logged.max(0) as u64,
            active: active.max(0) as u64,
            ended: ended.max(0) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_maps_to_where_clause() {
        assert_eq!(status_clause(StatusFilter::All), "");
        assert_eq!(status_clause(StatusFilter::Ended), " AND status = 'ended'");
        assert_eq!(status_clause(StatusFilter::Active), " AND status = 'active'");
    }
}
