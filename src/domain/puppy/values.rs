//! Value objects describing a puppy.

use chrono::Datelike;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, Timestamp};

/// Maximum length for a puppy name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Kilograms in one pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Display name of a puppy, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PuppyName(String);

impl PuppyName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("PuppyName cannot be empty"));
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "PuppyName cannot exceed 100 characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PuppyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Breed label. Free text, no length cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Breed(String);

impl Breed {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Breed cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Date of birth. Never in the future relative to the clock that built it.
///
/// Ages are derived against a caller-supplied `now`, never frozen at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthDate(Timestamp);

impl BirthDate {
    /// Parses an RFC 3339 timestamp or `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if unparsable or after `now`
    pub fn new(raw: &str, now: Timestamp) -> Result<Self, DomainError> {
        let value = Timestamp::parse(raw)
            .ok_or_else(|| DomainError::validation("BirthDate must be a valid date"))?;
        if value.is_after(&now) {
            return Err(DomainError::validation("BirthDate cannot be in the future"));
        }
        Ok(Self(value))
    }

    /// Reconstitute a stored birth date without re-checking it against
    /// the present.
    pub fn reconstitute(value: Timestamp) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Timestamp {
        self.0
    }

    /// Whole days elapsed since birth.
    pub fn age_in_days(&self, now: Timestamp) -> i64 {
        now.duration_since(&self.0).num_days()
    }

    /// Whole weeks elapsed since birth.
    pub fn age_in_weeks(&self, now: Timestamp) -> i64 {
        self.age_in_days(now).div_euclid(7)
    }

    /// Whole calendar months elapsed since birth.
    ///
    /// A month counts once the same day-of-month is reached, so a puppy born
    /// on the 15th turns one month old on the 15th of the next month.
    pub fn age_in_months(&self, now: Timestamp) -> i64 {
        let born = self.0.as_datetime();
        let today = now.as_datetime();
        let mut months = i64::from(today.year() - born.year()) * 12
            + i64::from(today.month()) - i64::from(born.month());
        if today.day() < born.day() {
            months -= 1;
        }
        months.max(0)
    }
}

/// Unit a weight is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(DomainError::validation(format!("Invalid WeightUnit: {}", s))),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strictly positive body weight with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    value: f64,
    unit: WeightUnit,
}

impl Weight {
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if `value` is not a finite number above zero
    pub fn new(value: f64, unit: WeightUnit) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::validation("Weight must be greater than 0"));
        }
        Ok(Self { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Same physical weight expressed in `unit`.
    pub fn convert_to(&self, unit: WeightUnit) -> Weight {
        let value = match (self.unit, unit) {
            (WeightUnit::Kg, WeightUnit::Lbs) => self.value / KG_PER_LB,
            (WeightUnit::Lbs, WeightUnit::Kg) => self.value * KG_PER_LB,
            _ => self.value,
        };
        Weight { value, unit }
    }

    pub fn in_kg(&self) -> f64 {
        self.convert_to(WeightUnit::Kg).value
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
