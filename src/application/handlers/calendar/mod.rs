//! Calendar command and query handlers.

mod create_event;
mod delete_event;
mod generate_vaccination_timeline;
mod get_event;
mod list_events;
mod recurring_input;
mod schedule_next_occurrence;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use generate_vaccination_timeline::{
    GenerateVaccinationTimelineCommand, GenerateVaccinationTimelineHandler,
};
pub use get_event::{EventView, GetEventHandler, GetEventQuery};
pub use list_events::{ListEventsHandler, ListEventsQuery, DEFAULT_UPCOMING_LIMIT};
pub use recurring_input::RecurringPatternInput;
pub use schedule_next_occurrence::{ScheduleNextOccurrenceCommand, ScheduleNextOccurrenceHandler};
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
