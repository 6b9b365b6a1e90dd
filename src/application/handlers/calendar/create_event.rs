//! CreateEventHandler - Command handler for scheduling a calendar event.

use std::sync::Arc;

use super::RecurringPatternInput;
use crate::domain::calendar::{Event, EventDateTime, EventDescription, EventTitle, EventType};
use crate::domain::foundation::{DomainResult, EventId, PuppyId};
use crate::ports::{Clock, EventRepository};

/// Command to create a calendar event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub event_date_time: String,
    /// Snake-case event type, e.g. `vet_appointment`
    pub event_type: String,
    pub puppy_id: String,
    pub recurring_pattern: Option<RecurringPatternInput>,
}

/// Handler for creating events.
pub struct CreateEventHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Validates title, description, date, type, recurrence and puppy id in
    /// that order; the first failure is returned and nothing is saved.
    pub async fn handle(&self, cmd: CreateEventCommand) -> DomainResult<Event> {
        let now = self.clock.now();

        let title = EventTitle::new(cmd.title)?;
        let description = EventDescription::new(cmd.description.unwrap_or_default())?;
        let event_date_time = EventDateTime::new(&cmd.event_date_time)?;
        let event_type = cmd.event_type.parse::<EventType>()?;
        let recurring_pattern = cmd
            .recurring_pattern
            .map(|input| input.to_pattern(now))
            .transpose()?;
        let puppy_id = PuppyId::new(cmd.puppy_id)?;

        let event = Event::new(
            EventId::generate(),
            title,
            description,
            event_date_time,
            event_type,
            puppy_id,
            recurring_pattern,
            now,
        );

        let saved = self.repository.save(&event).await?;
        tracing::debug!(
            event_id = %saved.id(),
            puppy_id = %saved.puppy_id(),
            event_type = %saved.event_type(),
            "Event created"
        );
        Ok(saved)
    }
}
