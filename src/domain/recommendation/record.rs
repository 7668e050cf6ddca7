//! Per-user recommendation record.

use serde::{Deserialize, Serialize};

use super::policy::{next_reps, Trend, MIN_RECOMMENDED_REPS, REASON_NO_HISTORY};
use crate::domain::foundation::{Timestamp, UserId};

/// The current recommended target for a user.
///
/// # Invariants
///
/// - `recommended_reps >= 1`
/// - `updated_at` is `None` only for the default (never persisted) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    user_id: UserId,
    recommended_reps: i32,
    reason: String,
    trend: Trend,
    updated_at: Option<Timestamp>,
}

impl Recommendation {
    /// Recommendation for a user who has never completed a session.
    pub fn initial(user_id: UserId) -> Self {
        Self {
            user_id,
            recommended_reps: MIN_RECOMMENDED_REPS,
            reason: REASON_NO_HISTORY.to_string(),
            trend: Trend::Initial,
            updated_at: None,
        }
    }

    /// Recommendation derived from a just-ended session.
    pub fn after_session(
        user_id: UserId,
        assigned_reps: i32,
        completed_reps: i32,
        now: Timestamp,
    ) -> Self {
        let next = next_reps(assigned_reps, completed_reps);
        Self {
            user_id,
            recommended_reps: next.reps,
            reason: next.reason.to_string(),
            trend: next.trend,
            updated_at: Some(now),
        }
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(
        user_id: UserId,
        recommended_reps: i32,
        reason: String,
        trend: Trend,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            recommended_reps,
            reason,
            trend,
            updated_at: Some(updated_at),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn recommended_reps(&self) -> i32 {
        self.recommended_reps
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }
}
