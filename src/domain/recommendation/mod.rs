//! Recommendation domain module.
//!
//! Holds the rep progression rule and the per-user record it produces.

mod policy;
mod record;

pub use policy::{
    next_reps, NextReps, Performance, Trend, FAILURE_DECREMENT, MIN_RECOMMENDED_REPS,
    REASON_COMPLETED, REASON_MISSED, REASON_NO_HISTORY, SUCCESS_INCREMENT,
};
pub use record::Recommendation;
