//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Keyed-map repositories for tests and development
//! - `postgres` - PostgreSQL repositories for puppies and events
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::{
    InMemoryAnalyticsEventRepository, InMemoryEventRepository, InMemoryPuppyRepository,
    InMemoryRecommendationRepository, InMemoryTrainingSessionRepository, InMemoryUserRepository,
};
pub use postgres::{PostgresEventRepository, PostgresPuppyRepository};
