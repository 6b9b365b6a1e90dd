//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// Domain code never calls this directly; it receives `now` from the
    /// injected clock.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses RFC 3339 (`2024-01-15T10:30:00Z`) or a plain calendar date
    /// (`2024-01-15`, read as midnight UTC).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|date| Self(date.and_time(chrono::NaiveTime::MIN).and_utc()))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp exactly `weeks * 7 * 24h` later.
    pub fn plus_weeks(&self, weeks: i64) -> Self {
        Self(self.0 + Duration::weeks(weeks))
    }

    /// Adds whole days, returning `None` when the result leaves chrono's range.
    pub fn checked_plus_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Adds calendar months keeping the day-of-month and time of day.
    ///
    /// A day-of-month that does not exist in the target month overflows into
    /// the following month: 2024-01-31 plus one month is 2024-03-02.
    pub fn checked_add_months(&self, months: i64) -> Option<Self> {
        let date = self.0.date_naive();
        let total = i64::from(date.year())
            .checked_mul(12)?
            .checked_add(i64::from(date.month0()))?
            .checked_add(months)?;
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let overflowed = first_of_month
            .checked_add_signed(Duration::days(i64::from(date.day0())))?;

        Some(Self(overflowed.and_time(self.0.time()).and_utc()))
    }

    /// Adds calendar years with the same overflow rule as months.
    pub fn checked_add_years(&self, years: i64) -> Option<Self> {
        self.checked_add_months(years.checked_mul(12)?)
    }

    /// Returns this instant with the time of day reset to 00:00:00 UTC.
    pub fn start_of_day(&self) -> Self {
        Self(self.0.date_naive().and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
