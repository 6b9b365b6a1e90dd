//! Fixtures shared by handler tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapters::{FixedClock, InMemoryEventRepository};
use crate::domain::calendar::{Event, EventType};
use crate::domain::foundation::{DomainError, EventId, PuppyId, Repository, Timestamp};
use crate::ports::EventRepository;

/// 2024-06-01T12:00:00Z
pub fn now() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(now()))
}

/// `now()` shifted by whole days, as an RFC 3339 string.
pub fn days_from_now(days: i64) -> String {
    now().plus_days(days).as_datetime().to_rfc3339()
}

/// Event repository whose `save` fails once `fail_after` saves succeeded.
pub struct FlakyEventRepository {
    pub inner: InMemoryEventRepository,
    fail_after: usize,
    saves: AtomicUsize,
}

impl FlakyEventRepository {
    pub fn failing_after(fail_after: usize) -> Self {
        Self {
            inner: InMemoryEventRepository::new(),
            fail_after,
            saves: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Repository<Event, EventId> for FlakyEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, event: &Event) -> Result<Event, DomainError> {
        if self.saves.fetch_add(1, Ordering::SeqCst) >= self.fail_after {
            return Err(DomainError::internal("Simulated save failure"));
        }
        self.inner.save(event).await
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        self.inner.update(event).await
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl EventRepository for FlakyEventRepository {
    async fn find_by_puppy_id(&self, puppy_id: &PuppyId) -> Result<Vec<Event>, DomainError> {
        self.inner.find_by_puppy_id(puppy_id).await
    }

    async fn find_by_date_range(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        self.inner.find_by_date_range(start, end).await
    }

    async fn find_by_type(&self, event_type: EventType) -> Result<Vec<Event>, DomainError> {
        self.inner.find_by_type(event_type).await
    }

    async fn find_upcoming_events(
        &self,
        puppy_id: &PuppyId,
        limit: usize,
        now: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        self.inner.find_upcoming_events(puppy_id, limit, now).await
    }
}
