//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler owns its repository ports and a clock; `now` is read once per
//! call and threaded through every domain decision in that call.

pub mod analytics;
pub mod calendar;
pub mod puppy;
pub mod recommendation;
pub mod training;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use analytics::{
    EnrichAnalyticsEventCommand, EnrichAnalyticsEventHandler, TrackAnalyticsEventCommand,
    TrackAnalyticsEventHandler,
};
pub use calendar::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand, DeleteEventHandler, EventView,
    GenerateVaccinationTimelineCommand, GenerateVaccinationTimelineHandler, GetEventHandler,
    GetEventQuery, ListEventsHandler, ListEventsQuery, RecurringPatternInput,
    ScheduleNextOccurrenceCommand, ScheduleNextOccurrenceHandler, UpdateEventCommand,
    UpdateEventHandler, DEFAULT_UPCOMING_LIMIT,
};
pub use puppy::{
    CreatePuppyCommand, CreatePuppyHandler, DeletePuppyCommand, DeletePuppyHandler,
    GetPuppyHandler, GetPuppyQuery, ListOwnerPuppiesHandler, ListOwnerPuppiesQuery,
    PuppyProfile, UpdatePuppyWeightCommand, UpdatePuppyWeightHandler,
};
pub use recommendation::{
    CreateRecommendationCommand, CreateRecommendationHandler,
    UpdateRecommendationConfidenceCommand, UpdateRecommendationConfidenceHandler,
};
pub use training::{
    RecordTrainingSessionCommand, RecordTrainingSessionHandler, UpdateTrainingNotesCommand,
    UpdateTrainingNotesHandler,
};
pub use user::{RegisterUserCommand, RegisterUserHandler};
