//! Recommendation query handlers.

mod get_recommendation;

pub use get_recommendation::{
    GetRecommendationHandler, GetRecommendationQuery, Progression, RecommendationView,
};
