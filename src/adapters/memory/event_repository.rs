//! In-memory calendar event repository.

use async_trait::async_trait;

use crate::domain::calendar::{Event, EventType};
use crate::domain::foundation::{DomainError, EventId, PuppyId, Timestamp};
use crate::ports::EventRepository;

memory_repository!(InMemoryEventRepository, Event, EventId, "Event");

impl InMemoryEventRepository {
    /// Matching events sorted by date; the sort is stable so equal dates
    /// stay in insertion order.
    async fn sorted_where<F>(&self, predicate: F) -> Vec<Event>
    where
        F: Fn(&Event) -> bool,
    {
        let mut events = self.store.filter(predicate).await;
        events.sort_by_key(|e| e.event_date_time().value());
        events
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_puppy_id(&self, puppy_id: &PuppyId) -> Result<Vec<Event>, DomainError> {
        Ok(self.sorted_where(|e| e.puppy_id() == puppy_id).await)
    }

    async fn find_by_date_range(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        Ok(self
            .sorted_where(|e| {
                let at = e.event_date_time().value();
                !at.is_before(&start) && !at.is_after(&end)
            })
            .await)
    }

    async fn find_by_type(&self, event_type: EventType) -> Result<Vec<Event>, DomainError> {
        Ok(self.sorted_where(|e| e.event_type() == event_type).await)
    }

    async fn find_upcoming_events(
        &self,
        puppy_id: &PuppyId,
        limit: usize,
        now: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        let mut events = self
            .sorted_where(|e| e.puppy_id() == puppy_id && e.is_upcoming(now))
            .await;
        events.truncate(limit);
        Ok(events)
    }
}
