//! Dependency wiring.
//!
//! Picks repository adapters for the configured storage backend and hands
//! every handler the same clock.

use std::sync::Arc;

use crate::adapters::postgres::{self, PostgresEventRepository, PostgresPuppyRepository};
use crate::adapters::{
    InMemoryAnalyticsEventRepository, InMemoryEventRepository, InMemoryPuppyRepository,
    InMemoryRecommendationRepository, InMemoryTrainingSessionRepository, InMemoryUserRepository,
    SystemClock,
};
use crate::application::handlers::{
    CreateEventHandler, CreatePuppyHandler, CreateRecommendationHandler, DeleteEventHandler,
    DeletePuppyHandler, EnrichAnalyticsEventHandler, GenerateVaccinationTimelineHandler,
    GetEventHandler, GetPuppyHandler, ListEventsHandler, ListOwnerPuppiesHandler,
    RecordTrainingSessionHandler, RegisterUserHandler, ScheduleNextOccurrenceHandler,
    TrackAnalyticsEventHandler, UpdateEventHandler, UpdatePuppyWeightHandler,
    UpdateRecommendationConfidenceHandler, UpdateTrainingNotesHandler,
};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::foundation::DomainError;
use crate::ports::{
    AnalyticsEventRepository, Clock, EventRepository, PuppyRepository, RecommendationRepository,
    TrainingSessionRepository, UserRepository,
};

/// Aggregates with no Postgres tables; they stay in memory on every backend.
pub const MEMORY_ONLY_AGGREGATES: [&str; 4] = [
    "users",
    "training_sessions",
    "recommendations",
    "analytics_events",
];

/// One adapter per repository port.
#[derive(Clone)]
pub struct Repositories {
    pub puppies: Arc<dyn PuppyRepository>,
    pub events: Arc<dyn EventRepository>,
    pub users: Arc<dyn UserRepository>,
    pub training_sessions: Arc<dyn TrainingSessionRepository>,
    pub recommendations: Arc<dyn RecommendationRepository>,
    pub analytics_events: Arc<dyn AnalyticsEventRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            puppies: Arc::new(InMemoryPuppyRepository::new()),
            events: Arc::new(InMemoryEventRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            training_sessions: Arc::new(InMemoryTrainingSessionRepository::new()),
            recommendations: Arc::new(InMemoryRecommendationRepository::new()),
            analytics_events: Arc::new(InMemoryAnalyticsEventRepository::new()),
        }
    }

    /// Puppies and events in Postgres; the remaining aggregates have no
    /// tables yet and stay in memory.
    pub async fn postgres(config: &AppConfig) -> Result<Self, DomainError> {
        let pool = postgres::connect(&config.database).await?;
        if config.database.run_migrations {
            postgres::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
        }
        tracing::warn!(
            aggregates = ?MEMORY_ONLY_AGGREGATES,
            "Postgres backend stores puppies and events only; these aggregates are lost on restart"
        );

        Ok(Self {
            puppies: Arc::new(PostgresPuppyRepository::new(pool.clone())),
            events: Arc::new(PostgresEventRepository::new(pool)),
            ..Self::in_memory()
        })
    }
}

/// Every handler, ready to serve.
pub struct AppContainer {
    pub repositories: Repositories,

    pub create_puppy: CreatePuppyHandler,
    pub get_puppy: GetPuppyHandler,
    pub list_owner_puppies: ListOwnerPuppiesHandler,
    pub update_puppy_weight: UpdatePuppyWeightHandler,
    pub delete_puppy: DeletePuppyHandler,

    pub create_event: CreateEventHandler,
    pub update_event: UpdateEventHandler,
    pub get_event: GetEventHandler,
    pub delete_event: DeleteEventHandler,
    pub list_events: ListEventsHandler,
    pub generate_vaccination_timeline: GenerateVaccinationTimelineHandler,
    pub schedule_next_occurrence: ScheduleNextOccurrenceHandler,

    pub register_user: RegisterUserHandler,

    pub record_training_session: RecordTrainingSessionHandler,
    pub update_training_notes: UpdateTrainingNotesHandler,

    pub create_recommendation: CreateRecommendationHandler,
    pub update_recommendation_confidence: UpdateRecommendationConfidenceHandler,

    pub track_analytics_event: TrackAnalyticsEventHandler,
    pub enrich_analytics_event: EnrichAnalyticsEventHandler,
}

impl AppContainer {
    /// Builds adapters for the configured backend with the system clock.
    ///
    /// # Errors
    ///
    /// - `INTERNAL_ERROR` if the database is unreachable or a migration fails
    pub async fn build(config: &AppConfig) -> Result<Self, DomainError> {
        let repositories = match config.storage.backend {
            StorageBackend::Memory => Repositories::in_memory(),
            StorageBackend::Postgres => Repositories::postgres(config).await?,
        };
        tracing::debug!(backend = %config.storage.backend, "Repositories ready");

        Ok(Self::with_repositories(repositories, Arc::new(SystemClock)))
    }

    pub fn with_repositories(repositories: Repositories, clock: Arc<dyn Clock>) -> Self {
        let r = &repositories;
        Self {
            create_puppy: CreatePuppyHandler::new(r.puppies.clone(), clock.clone()),
            get_puppy: GetPuppyHandler::new(r.puppies.clone(), clock.clone()),
            list_owner_puppies: ListOwnerPuppiesHandler::new(r.puppies.clone()),
            update_puppy_weight: UpdatePuppyWeightHandler::new(r.puppies.clone(), clock.clone()),
            delete_puppy: DeletePuppyHandler::new(r.puppies.clone()),

            create_event: CreateEventHandler::new(r.events.clone(), clock.clone()),
            update_event: UpdateEventHandler::new(r.events.clone(), clock.clone()),
            get_event: GetEventHandler::new(r.events.clone(), clock.clone()),
            delete_event: DeleteEventHandler::new(r.events.clone()),
            list_events: ListEventsHandler::new(r.events.clone(), clock.clone()),
            generate_vaccination_timeline: GenerateVaccinationTimelineHandler::new(
                r.events.clone(),
                clock.clone(),
            ),
            schedule_next_occurrence: ScheduleNextOccurrenceHandler::new(
                r.events.clone(),
                clock.clone(),
            ),

            register_user: RegisterUserHandler::new(r.users.clone(), clock.clone()),

            record_training_session: RecordTrainingSessionHandler::new(
                r.training_sessions.clone(),
                clock.clone(),
            ),
            update_training_notes: UpdateTrainingNotesHandler::new(
                r.training_sessions.clone(),
                clock.clone(),
            ),

            create_recommendation: CreateRecommendationHandler::new(
                r.recommendations.clone(),
                clock.clone(),
            ),
            update_recommendation_confidence: UpdateRecommendationConfidenceHandler::new(
                r.recommendations.clone(),
                clock.clone(),
            ),

            track_analytics_event: TrackAnalyticsEventHandler::new(
                r.analytics_events.clone(),
                clock,
            ),
            enrich_analytics_event: EnrichAnalyticsEventHandler::new(r.analytics_events.clone()),

            repositories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::{CreatePuppyCommand, GetPuppyQuery};

    #[test]
    fn memory_only_aggregates_name_every_non_postgres_repository() {
        assert_eq!(
            MEMORY_ONLY_AGGREGATES,
            ["users", "training_sessions", "recommendations", "analytics_events"]
        );
    }

    #[tokio::test]
    async fn memory_backend_wires_shared_repositories() {
        let container = AppContainer::build(&AppConfig::default()).await.unwrap();

        let puppy = container
            .create_puppy
            .handle(CreatePuppyCommand {
                name: "Biscuit".to_string(),
                breed: "Beagle".to_string(),
                birth_date: "2024-01-15".to_string(),
                weight: 4.2,
                weight_unit: "kg".to_string(),
                owner_id: "user-1".to_string(),
            })
            .await
            .unwrap();

        let profile = container
            .get_puppy
            .handle(GetPuppyQuery {
                puppy_id: puppy.id().to_string(),
            })
            .await
            .unwrap();

        assert_eq!(profile.puppy.id(), puppy.id());
    }
}
