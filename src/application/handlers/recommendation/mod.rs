//! Recommendation command handlers.

mod create_recommendation;
mod update_recommendation_confidence;

pub use create_recommendation::{CreateRecommendationCommand, CreateRecommendationHandler};
pub use update_recommendation_confidence::{
    UpdateRecommendationConfidenceCommand, UpdateRecommendationConfidenceHandler,
};
