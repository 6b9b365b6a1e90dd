//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque non-empty strings. Persistence hands them back
//! verbatim; new aggregates get a UUID v4 string from `generate()`.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::DomainError;

/// Generates a string-backed identifier type with a single validated
/// constructor.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, rejecting empty or whitespace-only input.
            pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(DomainError::validation(concat!(
                        stringify!($name),
                        " cannot be empty"
                    )));
                }
                Ok(Self(id))
            }

            /// Creates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a puppy aggregate.
    PuppyId
);
string_id!(
    /// Identifier of a calendar event.
    EventId
);
string_id!(
    /// Identifier of a user (typically issued by the auth provider).
    UserId
);
string_id!(
    /// Identifier of a recorded training session.
    TrainingSessionId
);
string_id!(
    /// Identifier of an AI recommendation.
    RecommendationId
);
string_id!(
    /// Identifier of a tracked analytics event.
    AnalyticsEventId
);
