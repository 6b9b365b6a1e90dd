//! UpdateEventHandler - Command handler for partial event updates.
//!
//! Only fields present in the command change. Every present field is
//! validated before any is applied, so a rejected update leaves the stored
//! event untouched.

use std::sync::Arc;

use super::RecurringPatternInput;
use crate::domain::calendar::{Event, EventDateTime, EventDescription, EventTitle, EventType};
use crate::domain::foundation::{DomainError, DomainResult, EventId};
use crate::ports::{Clock, EventRepository};

/// Command to update an event. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventCommand {
    pub event_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date_time: Option<String>,
    pub event_type: Option<String>,
    /// `Some(None)` removes the recurrence; `None` keeps it.
    pub recurring_pattern: Option<Option<RecurringPatternInput>>,
}

/// Handler for updating events.
pub struct UpdateEventHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> DomainResult<Event> {
        let event_id = EventId::new(cmd.event_id)?;
        let mut event = self
            .repository
            .find_by_id(&event_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Event", &event_id))?;

        let now = self.clock.now();

        let title = cmd.title.map(EventTitle::new).transpose()?;
        let description = cmd.description.map(EventDescription::new).transpose()?;
        let event_date_time = cmd
            .event_date_time
            .as_deref()
            .map(EventDateTime::new)
            .transpose()?;
        let event_type = cmd
            .event_type
            .as_deref()
            .map(str::parse::<EventType>)
            .transpose()?;
        let recurring_pattern = cmd
            .recurring_pattern
            .map(|change| change.map(|input| input.to_pattern(now)).transpose())
            .transpose()?;

        if let Some(title) = title {
            event = event.with_title(title, now);
        }
        if let Some(description) = description {
            event = event.with_description(description, now);
        }
        if let Some(event_date_time) = event_date_time {
            event = event.rescheduled(event_date_time, now);
        }
        if let Some(event_type) = event_type {
            event = event.with_event_type(event_type, now);
        }
        if let Some(recurring_pattern) = recurring_pattern {
            event = event.with_recurring_pattern(recurring_pattern, now);
        }

        let updated = self.repository.update(&event).await?;
        tracing::debug!(event_id = %event_id, "Event updated");
        Ok(updated)
    }
}
