//! Value objects for calendar events.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, Timestamp};

/// Maximum length for an event title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for an event description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Event title, 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventTitle(String);

impl EventTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("EventTitle cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "EventTitle cannot exceed 200 characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form notes on an event. May be empty, at most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct EventDescription(String);

impl EventDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(
                "EventDescription cannot exceed 1000 characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// When an event takes place.
///
/// Past/future queries are answered relative to a caller-supplied `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventDateTime(Timestamp);

impl EventDateTime {
    /// Parses an RFC 3339 timestamp or `YYYY-MM-DD` date.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Timestamp::parse(raw)
            .map(Self)
            .ok_or_else(|| DomainError::validation("EventDateTime must be a valid date"))
    }

    /// Wraps an instant computed by the recurrence or timeline engine.
    pub fn from_timestamp(value: Timestamp) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Timestamp {
        self.0
    }

    pub fn is_future(&self, now: Timestamp) -> bool {
        self.0.is_after(&now)
    }

    pub fn is_past(&self, now: Timestamp) -> bool {
        self.0.is_before(&now)
    }

    /// Days from `now` until the event, partial days rounded up.
    ///
    /// Negative once the event has passed by at least a full day.
    pub fn days_until(&self, now: Timestamp) -> i64 {
        let millis = self.0.duration_since(&now).num_milliseconds();
        -(-millis).div_euclid(MILLIS_PER_DAY)
    }
}

/// Kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Vaccination,
    VetAppointment,
    Feeding,
    Training,
    Grooming,
    Medication,
    Custom,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::Vaccination,
        EventType::VetAppointment,
        EventType::Feeding,
        EventType::Training,
        EventType::Grooming,
        EventType::Medication,
        EventType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Vaccination => "vaccination",
            EventType::VetAppointment => "vet_appointment",
            EventType::Feeding => "feeding",
            EventType::Training => "training",
            EventType::Grooming => "grooming",
            EventType::Medication => "medication",
            EventType::Custom => "custom",
        }
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| DomainError::validation(format!("Invalid EventType: {}", s)))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How soon an event needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    /// High within a day, medium within a week, low otherwise.
    pub fn from_days_until(days: i64) -> Self {
        if days <= 1 {
            UrgencyLevel::High
        } else if days <= 7 {
            UrgencyLevel::Medium
        } else {
            UrgencyLevel::Low
        }
    }
}
