//! PostgreSQL implementation of UserReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::rows::{db_error, order_sql, row_to_user, user_sort_column};
use crate::domain::foundation::DomainError;
use crate::ports::{Page, UserListOptions, UserReader, UserSummary};

/// Read-optimized user listings.
#[derive(Clone)]
pub struct PostgresUserReader {
    pool: PgPool,
}

impl PostgresUserReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserReader for PostgresUserReader {
    async fn list(&self, options: &UserListOptions) -> Result<Page<UserSummary>, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count users", e))?;

        // Sort column and direction come from closed enums.
        let sql = format!(
            r#"
            SELECT u.id, u.name, u.email, u.created_at,
                   (SELECT COUNT(*) FROM workout_sessions s WHERE s.user_id = u.id)
                       AS total_workouts
            FROM users u
            ORDER BY {column} {order}, u.id {order}
            LIMIT $1 OFFSET $2
            "#,
            column = user_sort_column(options.sort_by),
            order = order_sql(options.order),
        );

        let rows = sqlx::query(&sql)
            .bind(i64::from(options.page.limit()))
            .bind(options.page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list users", e))?;

        let items = rows
            .iter()
            .map(|row| {
                let total_workouts: i64 = row
                    .try_get("total_workouts")
                    .map_err(|e| DomainError::database("Failed to get total_workouts", e))?;
                Ok(UserSummary {
                    user: row_to_user(row)?,
                    total_workouts: total_workouts.max(0) as u64,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Page::new(items, total.max(0) as u64, options.page))
    }
}
