//! Raw recurrence input shared by the create and update commands.

use crate::domain::calendar::{RecurrenceFrequency, RecurringPattern};
use crate::domain::foundation::{DomainError, DomainResult, Timestamp};

/// Recurrence as supplied by a caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringPatternInput {
    /// `daily`, `weekly`, `monthly` or `yearly`
    pub frequency: String,
    pub interval: i64,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl RecurringPatternInput {
    pub fn to_pattern(&self, now: Timestamp) -> DomainResult<RecurringPattern> {
        let frequency = self.frequency.parse::<RecurrenceFrequency>()?;
        let end_date = match &self.end_date {
            Some(raw) => Some(Timestamp::parse(raw).ok_or_else(|| {
                DomainError::validation("RecurringPattern end date must be a valid date")
            })?),
            None => None,
        };
        RecurringPattern::new(frequency, self.interval, end_date, now)
    }
}
