//! Row mapping and error translation shared by the PostgreSQL adapters.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{
    DomainError, ErrorCode, Timestamp, UserId, WorkoutSessionId, WorkoutStatus,
};
use crate::domain::recommendation::{Recommendation, Trend};
use crate::domain::user::User;
use crate::domain::workout::WorkoutSession;
use crate::ports::{SortOrder, UserSortField, WorkoutSortField};

/// Columns selected for every session query.
pub(super) const SESSION_COLUMNS: &str = "id, user_id, exercise_name, assigned_reps, \
     completed_reps, status, started_at, ended_at";

/// Maps a sqlx error to a domain error.
///
/// Connection-level failures become `ServiceUnavailable`; everything else
/// is a `DatabaseError`.
pub(super) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::new(ErrorCode::ServiceUnavailable, format!("{}: {}", context, err))
        }
        other => DomainError::database(context, other),
    }
}

/// True when `err` violates a unique constraint or index.
pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    Ok(User::reconstitute(
        UserId::new(column(row, "id")?),
        column(row, "name")?,
        column(row, "email")?,
        Timestamp::from_datetime(created_at),
    ))
}

pub(super) fn row_to_session(row: &PgRow) -> Result<WorkoutSession, DomainError> {
    let status: String = column(row, "status")?;
    let status = WorkoutStatus::parse(&status).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", status),
        )
    })?;
    let started_at: chrono::DateTime<chrono::Utc> = column(row, "started_at")?;
    let ended_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "ended_at")?;

    Ok(WorkoutSession::reconstitute(
        WorkoutSessionId::new(column(row, "id")?),
        UserId::new(column(row, "user_id")?),
        column(row, "exercise_name")?,
        column(row, "assigned_reps")?,
        column(row, "completed_reps")?,
        status,
        Timestamp::from_datetime(started_at),
        ended_at.map(Timestamp::from_datetime),
    ))
}

pub(super) fn row_to_recommendation(row: &PgRow) -> Result<Recommendation, DomainError> {
    let trend: String = column(row, "trend")?;
    let trend = Trend::parse(&trend).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid recommendation trend: {}", trend),
        )
    })?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(Recommendation::reconstitute(
        UserId::new(column(row, "user_id")?),
        column(row, "recommended_reps")?,
        column(row, "reason")?,
        trend,
        Timestamp::from_datetime(updated_at),
    ))
}

pub(super) fn order_sql(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

pub(super) fn user_sort_column(field: UserSortField) -> &'static str {
    match field {
        UserSortField::CreatedAt => "u.created_at",
        UserSortField::Name => "u.name",
        UserSortField::Id => "u.id",
    }
}

pub(super) fn session_sort_column(field: WorkoutSortField) -> &'static str {
    match field {
        WorkoutSortField::StartedAt => "started_at",
        WorkoutSortField::EndedAt => "ended_at",
        WorkoutSortField::Id => "id",
    }
}
