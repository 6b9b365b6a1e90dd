//! Calendar event repository port.
//!
//! # Ordering
//!
//! Finders return events sorted ascending by `event_date_time`. Events that
//! share a date keep the order in which they were saved.

use async_trait::async_trait;

use crate::domain::calendar::{Event, EventType};
use crate::domain::foundation::{DomainError, EventId, PuppyId, Repository, Timestamp};

/// Repository port for Event aggregate persistence.
#[async_trait]
pub trait EventRepository: Repository<Event, EventId> {
    /// All events for a puppy.
    async fn find_by_puppy_id(&self, puppy_id: &PuppyId) -> Result<Vec<Event>, DomainError>;

    /// Events whose date lies within `[start, end]`, inclusive on both ends.
    async fn find_by_date_range(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Event>, DomainError>;

    /// Events of one type across all puppies.
    async fn find_by_type(&self, event_type: EventType) -> Result<Vec<Event>, DomainError>;

    /// At most `limit` events for a puppy dated strictly after `now`.
    async fn find_upcoming_events(
        &self,
        puppy_id: &PuppyId,
        limit: usize,
        now: Timestamp,
    ) -> Result<Vec<Event>, DomainError>;
}
