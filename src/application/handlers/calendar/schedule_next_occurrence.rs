//! ScheduleNextOccurrenceHandler - Materializes the next instance of a
//! recurring event.

use std::sync::Arc;

use crate::domain::calendar::Event;
use crate::domain::foundation::{DomainError, DomainResult, EventId};
use crate::ports::{Clock, EventRepository};

#[derive(Debug, Clone)]
pub struct ScheduleNextOccurrenceCommand {
    pub event_id: String,
}

pub struct ScheduleNextOccurrenceHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl ScheduleNextOccurrenceHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Saves and returns the following occurrence, or `None` when the event
    /// does not recur or its pattern has ended.
    ///
    /// Repeating the call returns the occurrence already on the calendar
    /// (same puppy, title, type and date) instead of saving a duplicate.
    pub async fn handle(&self, cmd: ScheduleNextOccurrenceCommand) -> DomainResult<Option<Event>> {
        let event_id = EventId::new(cmd.event_id)?;
        let event = self
            .repository
            .find_by_id(&event_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Event", &event_id))?;

        let Some(next) = event.next_occurrence(EventId::generate(), self.clock.now())? else {
            tracing::debug!(event_id = %event_id, "No further occurrence");
            return Ok(None);
        };

        let existing = self
            .repository
            .find_by_puppy_id(next.puppy_id())
            .await?
            .into_iter()
            .find(|e| {
                e.event_date_time() == next.event_date_time()
                    && e.title() == next.title()
                    && e.event_type() == next.event_type()
            });
        if let Some(existing) = existing {
            tracing::debug!(
                event_id = %event_id,
                next_event_id = %existing.id(),
                "Next occurrence already scheduled"
            );
            return Ok(Some(existing));
        }

        let saved = self.repository.save(&next).await?;
        tracing::debug!(
            event_id = %event_id,
            next_event_id = %saved.id(),
            "Next occurrence scheduled"
        );
        Ok(Some(saved))
    }
}
