//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::rows::{db_error, is_unique_violation, row_to_user};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{email_taken, NewUser, User};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(*user.created_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                email_taken(user.email().unwrap_or_default())
            } else {
                db_error("Failed to insert user", e)
            }
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database("Failed to get id", e))?;
        Ok(user.clone().into_user(UserId::new(id)))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check user existence", e))?;

        Ok(result.0)
    }
}
