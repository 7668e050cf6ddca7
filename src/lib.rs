//! Workout Tracker - Session logging with adaptive rep recommendations
//!
//! Users start a workout with an assigned rep count, log what they actually
//! completed, and end the session. Ending a session feeds the progression
//! rule that decides how many reps to assign next time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
