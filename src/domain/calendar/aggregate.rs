//! Calendar event aggregate.
//!
//! Events belong to a puppy by id only; the puppy aggregate never holds
//! references to its events.

use serde::Serialize;

use super::{
    EventDateTime, EventDescription, EventTitle, EventType, RecurringPattern, UrgencyLevel,
};
use crate::domain::foundation::{DomainResult, EventId, PuppyId, Timestamp};

/// Calendar event for a puppy.
///
/// # Invariants
///
/// - Every field is an already-validated value object
/// - Update methods return a new event that carries every untouched field
///   forward unchanged and stamps `updated_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    title: EventTitle,
    description: EventDescription,
    event_date_time: EventDateTime,
    event_type: EventType,
    puppy_id: PuppyId,
    recurring_pattern: Option<RecurringPattern>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Event {
    /// Create a new event at `now`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EventId,
        title: EventTitle,
        description: EventDescription,
        event_date_time: EventDateTime,
        event_type: EventType,
        puppy_id: PuppyId,
        recurring_pattern: Option<RecurringPattern>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            event_date_time,
            event_type,
            puppy_id,
            recurring_pattern,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an event from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EventId,
        title: EventTitle,
        description: EventDescription,
        event_date_time: EventDateTime,
        event_type: EventType,
        puppy_id: PuppyId,
        recurring_pattern: Option<RecurringPattern>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            event_date_time,
            event_type,
            puppy_id,
            recurring_pattern,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn title(&self) -> &EventTitle {
        &self.title
    }

    pub fn description(&self) -> &EventDescription {
        &self.description
    }

    pub fn event_date_time(&self) -> &EventDateTime {
        &self.event_date_time
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn puppy_id(&self) -> &PuppyId {
        &self.puppy_id
    }

    pub fn recurring_pattern(&self) -> Option<&RecurringPattern> {
        self.recurring_pattern.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_recurring(&self) -> bool {
        self.recurring_pattern.is_some()
    }

    /// Scheduled strictly after `now`.
    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        self.event_date_time.is_future(now)
    }

    /// A vaccination whose date has passed.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.event_date_time.is_past(now) && self.event_type == EventType::Vaccination
    }

    pub fn urgency_level(&self, now: Timestamp) -> UrgencyLevel {
        UrgencyLevel::from_days_until(self.event_date_time.days_until(now))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Updates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_title(&self, title: EventTitle, now: Timestamp) -> Self {
        Self {
            title,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: EventDescription, now: Timestamp) -> Self {
        Self {
            description,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn rescheduled(&self, event_date_time: EventDateTime, now: Timestamp) -> Self {
        Self {
            event_date_time,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_event_type(&self, event_type: EventType, now: Timestamp) -> Self {
        Self {
            event_type,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_recurring_pattern(
        &self,
        recurring_pattern: Option<RecurringPattern>,
        now: Timestamp,
    ) -> Self {
        Self {
            recurring_pattern,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Builds the following instance of a recurring event under `id`.
    ///
    /// Returns `Ok(None)` for one-off events and when the next date falls
    /// after the pattern's end date.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if the next date is out of range
    pub fn next_occurrence(&self, id: EventId, now: Timestamp) -> DomainResult<Option<Event>> {
        let Some(pattern) = self.recurring_pattern else {
            return Ok(None);
        };

        let next_at = pattern.next_occurrence(self.event_date_time.value())?;
        if !pattern.should_recur(next_at) {
            return Ok(None);
        }

        Ok(Some(Event::new(
            id,
            self.title.clone(),
            self.description.clone(),
            EventDateTime::from_timestamp(next_at),
            self.event_type,
            self.puppy_id.clone(),
            self.recurring_pattern,
            now,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::RecurrenceFrequency;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap())
    }

    fn event_on(date: Timestamp, event_type: EventType) -> Event {
        Event::new(
            EventId::new("evt-1").unwrap(),
            EventTitle::new("Vet check").unwrap(),
            EventDescription::new("Annual checkup").unwrap(),
            EventDateTime::from_timestamp(date),
            event_type,
            PuppyId::new("pup-1").unwrap(),
            None,
            at(2024, 1, 1),
        )
    }

    #[test]
    fn overdue_only_for_past_vaccinations() {
        let now = at(2024, 5, 1);
        assert!(event_on(at(2024, 4, 1), EventType::Vaccination).is_overdue(now));
        assert!(!event_on(at(2024, 4, 1), EventType::Grooming).is_overdue(now));
        assert!(!event_on(at(2024, 6, 1), EventType::Vaccination).is_overdue(now));
    }

    #[test]
    fn upcoming_means_strictly_future() {
        let now = at(2024, 5, 1);
        assert!(event_on(at(2024, 5, 2), EventType::Feeding).is_upcoming(now));
        assert!(!event_on(now, EventType::Feeding).is_upcoming(now));
    }

    #[test]
    fn urgency_levels() {
        let now = at(2024, 5, 1);
        assert_eq!(
            event_on(at(2024, 5, 2), EventType::Custom).urgency_level(now),
            UrgencyLevel::High
        );
        assert_eq!(
            event_on(at(2024, 5, 6), EventType::Custom).urgency_level(now),
            UrgencyLevel::Medium
        );
        assert_eq!(
            event_on(at(2024, 5, 20), EventType::Custom).urgency_level(now),
            UrgencyLevel::Low
        );
    }

    #[test]
    fn with_title_preserves_other_fields() {
        let original = event_on(at(2024, 5, 10), EventType::VetAppointment);
        let updated = original.with_title(EventTitle::new("Dental").unwrap(), at(2024, 2, 1));

        assert_eq!(updated.title().value(), "Dental");
        assert_eq!(updated.description(), original.description());
        assert_eq!(updated.event_date_time(), original.event_date_time());
        assert_eq!(updated.event_type(), original.event_type());
        assert_eq!(updated.puppy_id(), original.puppy_id());
        assert_eq!(updated.created_at(), original.created_at());
        assert_eq!(updated.updated_at(), &at(2024, 2, 1));
        assert_eq!(original.title().value(), "Vet check");
    }

    #[test]
    fn next_occurrence_of_one_off_event_is_none() {
        let event = event_on(at(2024, 5, 10), EventType::Feeding);
        assert_eq!(event.next_occurrence(EventId::generate(), at(2024, 5, 1)), Ok(None));
    }

    #[test]
    fn next_occurrence_advances_by_pattern() {
        let now = at(2024, 5, 1);
        let pattern = RecurringPattern::new(RecurrenceFrequency::Weekly, 2, None, now).unwrap();
        let event = event_on(at(2024, 5, 10), EventType::Training)
            .with_recurring_pattern(Some(pattern), now);

        let next = event
            .next_occurrence(EventId::new("evt-2").unwrap(), now)
            .unwrap()
            .unwrap();

        assert_eq!(next.id().as_str(), "evt-2");
        assert_eq!(next.event_date_time().value(), at(2024, 5, 24));
        assert_eq!(next.title(), event.title());
        assert_eq!(next.recurring_pattern(), Some(&pattern));
    }

    #[test]
    fn next_occurrence_stops_after_end_date() {
        let now = at(2024, 5, 1);
        let pattern =
            RecurringPattern::new(RecurrenceFrequency::Monthly, 1, Some(at(2024, 6, 1)), now)
                .unwrap();
        let event = event_on(at(2024, 5, 10), EventType::Medication)
            .with_recurring_pattern(Some(pattern), now);

        assert_eq!(event.next_occurrence(EventId::generate(), now), Ok(None));
    }
}
