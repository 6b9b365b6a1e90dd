//! Product analytics event.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{AnalyticsEventId, DomainError, Timestamp, UserId};

/// Maximum length of an event name, in characters.
pub const MAX_EVENT_NAME_LENGTH: usize = 100;

/// Arbitrary JSON properties attached to an analytics event.
pub type Properties = Map<String, Value>;

/// Name of a tracked action, e.g. `puppy_created`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventName(String);

impl EventName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("EventName cannot be empty"));
        }
        if value.chars().count() > MAX_EVENT_NAME_LENGTH {
            return Err(DomainError::validation(
                "EventName cannot exceed 100 characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Something a user did, with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    id: AnalyticsEventId,
    user_id: UserId,
    event_name: EventName,
    properties: Properties,
    occurred_at: Timestamp,
}

impl AnalyticsEvent {
    pub fn new(
        id: AnalyticsEventId,
        user_id: UserId,
        event_name: EventName,
        properties: Properties,
        occurred_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            event_name,
            properties,
            occurred_at,
        }
    }

    pub fn id(&self) -> &AnalyticsEventId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn event_name(&self) -> &EventName {
        &self.event_name
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn occurred_at(&self) -> &Timestamp {
        &self.occurred_at
    }

    /// Returns a copy whose properties are a shallow merge of the current
    /// ones and `extra`; keys in `extra` win.
    pub fn enrich_properties(&self, extra: Properties) -> Self {
        let mut properties = self.properties.clone();
        properties.extend(extra);
        Self {
            properties,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Properties {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn event(properties: Properties) -> AnalyticsEvent {
        AnalyticsEvent::new(
            AnalyticsEventId::new("ae-1").unwrap(),
            UserId::new("user-1").unwrap(),
            EventName::new("puppy_created").unwrap(),
            properties,
            Timestamp::now(),
        )
    }

    #[test]
    fn event_name_validation() {
        assert_eq!(EventName::new("").unwrap_err().message, "EventName cannot be empty");
        assert!(EventName::new("n".repeat(101)).is_err());
    }

    #[test]
    fn enrich_properties_merges_with_later_keys_winning() {
        let original = event(props(json!({"source": "web", "breed": "Beagle"})));

        let enriched = original.enrich_properties(props(json!({"source": "ios", "plan": "free"})));

        assert_eq!(
            Value::Object(enriched.properties().clone()),
            json!({"source": "ios", "breed": "Beagle", "plan": "free"})
        );
        assert_eq!(original.properties().get("source"), Some(&json!("web")));
    }

    #[test]
    fn enrich_is_shallow() {
        let original = event(props(json!({"device": {"os": "android", "version": 14}})));

        let enriched = original.enrich_properties(props(json!({"device": {"os": "ios"}})));

        assert_eq!(enriched.properties().get("device"), Some(&json!({"os": "ios"})));
    }
}
