//! Recurrence rules for repeating events.
//!
//! A pattern only answers questions; it never advances itself. Callers ask
//! for the next occurrence when they decide to schedule one.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, DomainResult, Timestamp};

/// Largest accepted interval. Stored intervals are 32-bit signed integers.
pub const MAX_INTERVAL: u32 = i32::MAX as u32;

/// Unit a recurrence interval is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceFrequency::Daily => "daily",
            RecurrenceFrequency::Weekly => "weekly",
            RecurrenceFrequency::Monthly => "monthly",
            RecurrenceFrequency::Yearly => "yearly",
        }
    }
}

impl FromStr for RecurrenceFrequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrenceFrequency::Daily),
            "weekly" => Ok(RecurrenceFrequency::Weekly),
            "monthly" => Ok(RecurrenceFrequency::Monthly),
            "yearly" => Ok(RecurrenceFrequency::Yearly),
            _ => Err(DomainError::validation(format!(
                "Invalid RecurrenceFrequency: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Repetition rule: every `interval` units of `frequency`, optionally until
/// `end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    #[serde(rename = "type")]
    frequency: RecurrenceFrequency,
    interval: u32,
    end_date: Option<Timestamp>,
}

impl RecurringPattern {
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if `interval` is not in `1..=MAX_INTERVAL`
    /// - `VALIDATION_ERROR` if `end_date` is not after `now`
    pub fn new(
        frequency: RecurrenceFrequency,
        interval: i64,
        end_date: Option<Timestamp>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let interval = positive_interval(interval)?;

        if let Some(end) = end_date {
            if !end.is_after(&now) {
                return Err(DomainError::validation(
                    "RecurringPattern end date must be in the future",
                ));
            }
        }

        Ok(Self {
            frequency,
            interval,
            end_date,
        })
    }

    /// Reconstitute a stored pattern.
    ///
    /// The end date is not compared with the present: a stored pattern may
    /// legitimately have run out.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if `interval` is not in `1..=MAX_INTERVAL`
    pub fn reconstitute(
        frequency: RecurrenceFrequency,
        interval: i64,
        end_date: Option<Timestamp>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            frequency,
            interval: positive_interval(interval)?,
            end_date,
        })
    }

    pub fn frequency(&self) -> RecurrenceFrequency {
        self.frequency
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn end_date(&self) -> Option<Timestamp> {
        self.end_date
    }

    /// The instant `interval` units after `from`.
    ///
    /// Weekly means exactly `7 * interval` days. Monthly and yearly keep the
    /// day-of-month and overflow into the following month when it does not
    /// exist (2024-01-31 + 1 month = 2024-03-02).
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if the result falls outside the representable range
    pub fn next_occurrence(&self, from: Timestamp) -> DomainResult<Timestamp> {
        let interval = i64::from(self.interval);
        let next = match self.frequency {
            RecurrenceFrequency::Daily => from.checked_plus_days(interval),
            RecurrenceFrequency::Weekly => from.checked_plus_days(interval * 7),
            RecurrenceFrequency::Monthly => from.checked_add_months(interval),
            RecurrenceFrequency::Yearly => from.checked_add_years(interval),
        };
        next.ok_or_else(|| {
            DomainError::validation("RecurringPattern next occurrence is out of range")
        })
    }

    /// False once `current` is past the end date; always true without one.
    pub fn should_recur(&self, current: Timestamp) -> bool {
        match self.end_date {
            Some(end) => !current.is_after(&end),
            None => true,
        }
    }
}

fn positive_interval(interval: i64) -> Result<u32, DomainError> {
    u32::try_from(interval)
        .ok()
        .filter(|i| (1..=MAX_INTERVAL).contains(i))
        .ok_or_else(|| DomainError::validation("RecurringPattern interval must be a positive integer"))
}
