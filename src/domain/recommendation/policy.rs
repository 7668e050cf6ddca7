//! Progression rule applied when a workout session ends.
//!
//! Pure functions only; persistence of the outcome happens in the same
//! write as the session end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest number of reps ever recommended.
pub const MIN_RECOMMENDED_REPS: i32 = 1;

/// Extra reps granted after a fully completed session.
pub const SUCCESS_INCREMENT: i32 = 2;

/// Reps removed after a session that fell short.
pub const FAILURE_DECREMENT: i32 = 1;

pub const REASON_NO_HISTORY: &str = "No workout history yet";
pub const REASON_COMPLETED: &str = "Completed all reps in last session";
pub const REASON_MISSED: &str = "Did not complete all reps in last session";

/// Direction of the most recent adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// No session has been completed yet.
    Initial,
    Improving,
    Regressing,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Initial => "initial",
            Trend::Improving => "improving",
            Trend::Regressing => "regressing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "initial" => Some(Trend::Initial),
            "improving" => Some(Trend::Improving),
            "regressing" => Some(Trend::Regressing),
            _ => None,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a session went relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Completed,
    Incomplete,
}

impl Performance {
    /// Over-completion counts as completion.
    pub fn assess(assigned_reps: i32, completed_reps: i32) -> Self {
        if completed_reps >= assigned_reps {
            Performance::Completed
        } else {
            Performance::Incomplete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Performance::Completed => "completed",
            Performance::Incomplete => "incomplete",
        }
    }
}

/// Outcome of the progression rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextReps {
    pub reps: i32,
    pub trend: Trend,
    pub reason: &'static str,
}

/// Computes the next target from the session's assigned (A) and completed (C) reps.
///
/// - `C >= A` gives `A + 2`, trend improving
/// - `C < A` gives `max(1, A - 1)`, trend regressing
pub fn next_reps(assigned_reps: i32, completed_reps: i32) -> NextReps {
    match Performance::assess(assigned_reps, completed_reps) {
        Performance::Completed => NextReps {
            reps: assigned_reps.saturating_add(SUCCESS_INCREMENT),
            trend: Trend::Improving,
            reason: REASON_COMPLETED,
        },
        Performance::Incomplete => NextReps {
            reps: assigned_reps
                .saturating_sub(FAILURE_DECREMENT)
                .max(MIN_RECOMMENDED_REPS),
            trend: Trend::Regressing,
            reason: REASON_MISSED,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_completion_adds_two() {
        let next = next_reps(10, 10);
        assert_eq!(next.reps, 12);
        assert_eq!(next.trend, Trend::Improving);
        assert_eq!(next.reason, REASON_COMPLETED);
    }

    #[test]
    fn shortfall_removes_one() {
        let next = next_reps(8, 5);
        assert_eq!(next.reps, 7);
        assert_eq!(next.trend, Trend::Regressing);
        assert_eq!(next.reason, REASON_MISSED);
    }

    #[test]
    fn floor_is_one() {
        assert_eq!(next_reps(1, 0).reps, 1);
    }

    #[test]
    fn over_completion_counts_as_completed() {
        assert_eq!(Performance::assess(5, 9), Performance::Completed);
        assert_eq!(next_reps(5, 9).reps, 7);
    }

    #[test]
    fn trend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Trend::Regressing).unwrap(),
            "\"regressing\""
        );
        assert_eq!(Trend::parse("initial"), Some(Trend::Initial));
        assert_eq!(Trend::parse("adjusting"), None);
    }

    proptest! {
        #[test]
        fn completing_target_always_adds_two(assigned in 1i32..10_000, extra in 0i32..1_000) {
            let next = next_reps(assigned, assigned + extra);
            prop_assert_eq!(next.reps, assigned + 2);
            prop_assert_eq!(next.trend, Trend::Improving);
        }

        #[test]
        fn missing_target_drops_one_with_floor(
            assigned in 1i32..10_000,
            completed in 0i32..10_000,
        ) {
            prop_assume!(completed < assigned);
            let next = next_reps(assigned, completed);
            prop_assert_eq!(next.reps, (assigned - 1).max(1));
            prop_assert_eq!(next.trend, Trend::Regressing);
        }

        #[test]
        fn recommendation_never_below_one(assigned in 1i32..10_000, completed in 0i32..20_000) {
            prop_assert!(next_reps(assigned, completed).reps >= MIN_RECOMMENDED_REPS);
        }
    }
}
