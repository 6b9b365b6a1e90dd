//! GetEventHandler - Query handler for a single event.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::calendar::{Event, UrgencyLevel};
use crate::domain::foundation::{DomainError, DomainResult, EventId, Timestamp};
use crate::ports::{Clock, EventRepository};

#[derive(Debug, Clone)]
pub struct GetEventQuery {
    pub event_id: String,
}

/// An event with its time-relative status evaluated at query time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub event: Event,
    pub is_upcoming: bool,
    pub is_overdue: bool,
    pub days_until: i64,
    pub urgency: UrgencyLevel,
}

impl EventView {
    pub fn at(event: Event, now: Timestamp) -> Self {
        Self {
            is_upcoming: event.is_upcoming(now),
            is_overdue: event.is_overdue(now),
            days_until: event.event_date_time().days_until(now),
            urgency: event.urgency_level(now),
            event,
        }
    }
}

pub struct GetEventHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl GetEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: GetEventQuery) -> DomainResult<EventView> {
        let event_id = EventId::new(query.event_id)?;
        let event = self
            .repository
            .find_by_id(&event_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Event", &event_id))?;

        Ok(EventView::at(event, self.clock.now()))
    }
}
