//! AI-generated care recommendation.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, PuppyId, RecommendationId, Timestamp};

/// Maximum length of recommendation text, in characters.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Confidence at or above which a recommendation is surfaced prominently.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Area of care a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Feeding,
    Training,
    Health,
    Behavior,
    Grooming,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Feeding => "feeding",
            RecommendationType::Training => "training",
            RecommendationType::Health => "health",
            RecommendationType::Behavior => "behavior",
            RecommendationType::Grooming => "grooming",
        }
    }
}

impl FromStr for RecommendationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feeding" => Ok(RecommendationType::Feeding),
            "training" => Ok(RecommendationType::Training),
            "health" => Ok(RecommendationType::Health),
            "behavior" => Ok(RecommendationType::Behavior),
            "grooming" => Ok(RecommendationType::Grooming),
            _ => Err(DomainError::validation(format!(
                "Invalid RecommendationType: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommendation body, 1-2000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecommendationContent(String);

impl RecommendationContent {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("RecommendationContent cannot be empty"));
        }
        if value.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::validation(
                "RecommendationContent cannot exceed 2000 characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Model confidence in the closed range 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::validation("Confidence must be between 0 and 1"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Recommendation produced for a puppy by the AI collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AIRecommendation {
    id: RecommendationId,
    puppy_id: PuppyId,
    recommendation_type: RecommendationType,
    content: RecommendationContent,
    confidence: Confidence,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AIRecommendation {
    pub fn new(
        id: RecommendationId,
        puppy_id: PuppyId,
        recommendation_type: RecommendationType,
        content: RecommendationContent,
        confidence: Confidence,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            puppy_id,
            recommendation_type,
            content,
            confidence,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &RecommendationId {
        &self.id
    }

    pub fn puppy_id(&self) -> &PuppyId {
        &self.puppy_id
    }

    pub fn recommendation_type(&self) -> RecommendationType {
        self.recommendation_type
    }

    pub fn content(&self) -> &RecommendationContent {
        &self.content
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_high_confidence(&self) -> bool {
        self.confidence.value() >= HIGH_CONFIDENCE_THRESHOLD
    }

    /// Returns a copy carrying the new confidence.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` if `confidence` is outside 0.0-1.0
    pub fn update_confidence(&self, confidence: f64, now: Timestamp) -> Result<Self, DomainError> {
        Ok(Self {
            confidence: Confidence::new(confidence)?,
            updated_at: now,
            ..self.clone()
        })
    }
}
