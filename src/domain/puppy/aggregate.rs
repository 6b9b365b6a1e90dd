//! Puppy aggregate entity.

use serde::Serialize;

use super::{BirthDate, Breed, PuppyName, Weight};
use crate::domain::foundation::{PuppyId, Timestamp, UserId};

/// Age at which a puppy counts as an adult dog.
pub const ADULT_AGE_MONTHS: i64 = 12;

/// Puppy aggregate.
///
/// # Invariants
///
/// - Every field is an already-validated value object
/// - Fields never change in place; updates return a new instance carrying a
///   fresh `updated_at`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puppy {
    id: PuppyId,
    name: PuppyName,
    breed: Breed,
    birth_date: BirthDate,
    current_weight: Weight,
    owner_id: UserId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Puppy {
    /// Create a new puppy at `now`.
    pub fn new(
        id: PuppyId,
        name: PuppyName,
        breed: Breed,
        birth_date: BirthDate,
        current_weight: Weight,
        owner_id: UserId,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            breed,
            birth_date,
            current_weight,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a puppy from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PuppyId,
        name: PuppyName,
        breed: Breed,
        birth_date: BirthDate,
        current_weight: Weight,
        owner_id: UserId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            breed,
            birth_date,
            current_weight,
            owner_id,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PuppyId {
        &self.id
    }

    pub fn name(&self) -> &PuppyName {
        &self.name
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn current_weight(&self) -> &Weight {
        &self.current_weight
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
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

    /// Twelve months or older.
    pub fn is_adult(&self, now: Timestamp) -> bool {
        self.birth_date.age_in_months(now) >= ADULT_AGE_MONTHS
    }

    /// Recommended meals per day for the current age.
    pub fn feeding_frequency(&self, now: Timestamp) -> u8 {
        match self.birth_date.age_in_months(now) {
            m if m < 3 => 4,
            m if m < 6 => 3,
            _ => 2,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns a copy carrying `weight` as the current weight.
    ///
    /// The unit is stored as given; nothing is converted.
    pub fn with_weight(&self, weight: Weight, now: Timestamp) -> Self {
        Self {
            current_weight: weight,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Returns a copy with a new name.
    pub fn with_name(&self, name: PuppyName, now: Timestamp) -> Self {
        Self {
            name,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Checks if the given user owns this puppy.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
