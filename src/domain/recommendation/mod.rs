//! AI recommendation domain module.

mod aggregate;

pub use aggregate::{
    AIRecommendation, Confidence, RecommendationContent, RecommendationType,
    HIGH_CONFIDENCE_THRESHOLD, MAX_CONTENT_LENGTH,
};
