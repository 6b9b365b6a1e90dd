//! Foundation module - Shared domain primitives.
//!
//! Contains the error type, result conventions, identifiers, timestamps and
//! the base repository contract used by every aggregate.

mod errors;
mod ids;
mod repository;
mod result;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{AnalyticsEventId, EventId, PuppyId, RecommendationId, TrainingSessionId, UserId};
pub use repository::Repository;
pub use result::{combine, DomainResult};
pub use timestamp::Timestamp;
