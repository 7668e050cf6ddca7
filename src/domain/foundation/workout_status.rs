//! WorkoutStatus enum for tracking the lifecycle of workout sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a workout session.
///
/// Logging reps is orthogonal to the status: a session stays `Active`
/// until it is ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    #[default]
    Active,
    Ended,
}

impl WorkoutStatus {
    /// Returns true if results may still be logged.
    pub fn is_active(&self) -> bool {
        matches!(self, WorkoutStatus::Active)
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Active => "active",
            WorkoutStatus::Ended => "ended",
        }
    }

    /// Parses the storage representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(WorkoutStatus::Active),
            "ended" => Some(WorkoutStatus::Ended),
            _ => None,
        }
    }
}

impl StateMachine for WorkoutStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkoutStatus::*;
        matches!((self, target), (Active, Ended))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WorkoutStatus::Active => vec![WorkoutStatus::Ended],
            WorkoutStatus::Ended => vec![],
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
