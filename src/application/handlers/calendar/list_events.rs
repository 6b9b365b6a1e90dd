//! ListEventsHandler - Query handler for event listings.
//!
//! Every listing is sorted ascending by event date; events sharing a date
//! keep their insertion order.

use std::sync::Arc;

use crate::domain::calendar::{Event, EventDateTime, EventType};
use crate::domain::foundation::{DomainError, DomainResult, PuppyId};
use crate::ports::{Clock, EventRepository};

/// Upcoming listings return at most this many events unless told otherwise.
pub const DEFAULT_UPCOMING_LIMIT: usize = 10;

/// Which events to list.
#[derive(Debug, Clone)]
pub enum ListEventsQuery {
    ByPuppy {
        puppy_id: String,
    },
    /// Events for a puppy dated strictly after now.
    Upcoming {
        puppy_id: String,
        limit: Option<usize>,
    },
    /// Inclusive range; both ends are RFC 3339 timestamps or `YYYY-MM-DD`.
    DateRange {
        start: String,
        end: String,
    },
    ByType {
        event_type: String,
    },
}

pub struct ListEventsHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl ListEventsHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: ListEventsQuery) -> DomainResult<Vec<Event>> {
        match query {
            ListEventsQuery::ByPuppy { puppy_id } => {
                let puppy_id = PuppyId::new(puppy_id)?;
                self.repository.find_by_puppy_id(&puppy_id).await
            }
            ListEventsQuery::Upcoming { puppy_id, limit } => {
                let puppy_id = PuppyId::new(puppy_id)?;
                let limit = limit.unwrap_or(DEFAULT_UPCOMING_LIMIT);
                if limit == 0 {
                    return Err(DomainError::validation("Limit must be a positive integer"));
                }
                self.repository
                    .find_upcoming_events(&puppy_id, limit, self.clock.now())
                    .await
            }
            ListEventsQuery::DateRange { start, end } => {
                let start = EventDateTime::new(&start)?.value();
                let end = EventDateTime::new(&end)?.value();
                if start.is_after(&end) {
                    return Err(DomainError::validation(
                        "Date range start must not be after end",
                    ));
                }
                self.repository.find_by_date_range(start, end).await
            }
            ListEventsQuery::ByType { event_type } => {
                let event_type = event_type.parse::<EventType>()?;
                self.repository.find_by_type(event_type).await
            }
        }
    }
}
