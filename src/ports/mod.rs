//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! Every repository extends the base `Repository<T, ID>` CRUD contract with
//! the finders its use-cases need.
//!
//! - `PuppyRepository` - Puppies, looked up by owner
//! - `EventRepository` - Calendar events by puppy, date range, type and upcoming
//! - `UserRepository` - Users, looked up by email
//! - `TrainingSessionRepository` - Training sessions by puppy
//! - `RecommendationRepository` - AI recommendations by puppy
//! - `AnalyticsEventRepository` - Analytics events by user
//!
//! ## Time
//!
//! - `Clock` - Source of the current instant

mod analytics_event_repository;
mod clock;
mod event_repository;
mod puppy_repository;
mod recommendation_repository;
mod training_session_repository;
mod user_repository;

pub use analytics_event_repository::AnalyticsEventRepository;
pub use clock::Clock;
pub use event_repository::EventRepository;
pub use puppy_repository::PuppyRepository;
pub use recommendation_repository::RecommendationRepository;
pub use training_session_repository::TrainingSessionRepository;
pub use user_repository::UserRepository;
