//! Training session record.

use serde::Serialize;

use crate::domain::foundation::{DomainError, PuppyId, Timestamp, TrainingSessionId};

/// Maximum length for a skill label, in characters.
pub const MAX_SKILL_LENGTH: usize = 100;

/// Longest session that can be logged, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 480;

/// Skill practised in a session, e.g. "sit" or "loose-leash walking".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Skill(String);

impl Skill {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Skill cannot be empty"));
        }
        if value.chars().count() > MAX_SKILL_LENGTH {
            return Err(DomainError::validation("Skill cannot exceed 100 characters"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Length of a session in whole minutes, 1-480.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionDuration(u32);

impl SessionDuration {
    pub fn new(minutes: i64) -> Result<Self, DomainError> {
        u32::try_from(minutes)
            .ok()
            .filter(|m| (1..=MAX_DURATION_MINUTES).contains(m))
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation("SessionDuration must be between 1 and 480 minutes")
            })
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

/// Share of successful repetitions, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SuccessRate(u8);

impl SuccessRate {
    pub fn new(percent: i64) -> Result<Self, DomainError> {
        u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .map(Self)
            .ok_or_else(|| DomainError::validation("SuccessRate must be between 0 and 100"))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

/// One logged training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    id: TrainingSessionId,
    puppy_id: PuppyId,
    skill: Skill,
    duration: SessionDuration,
    success_rate: SuccessRate,
    notes: Option<String>,
    session_date: Timestamp,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TrainingSession {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TrainingSessionId,
        puppy_id: PuppyId,
        skill: Skill,
        duration: SessionDuration,
        success_rate: SuccessRate,
        notes: Option<String>,
        session_date: Timestamp,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            puppy_id,
            skill,
            duration,
            success_rate,
            notes: normalize_notes(notes),
            session_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &TrainingSessionId {
        &self.id
    }

    pub fn puppy_id(&self) -> &PuppyId {
        &self.puppy_id
    }

    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    pub fn duration(&self) -> SessionDuration {
        self.duration
    }

    pub fn success_rate(&self) -> SuccessRate {
        self.success_rate
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn session_date(&self) -> &Timestamp {
        &self.session_date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns a copy with replaced notes. Blank notes clear them.
    pub fn update_notes(&self, notes: Option<String>, now: Timestamp) -> Self {
        Self {
            notes: normalize_notes(notes),
            updated_at: now,
            ..self.clone()
        }
    }
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}
