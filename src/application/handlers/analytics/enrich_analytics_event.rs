//! EnrichAnalyticsEventHandler - Command handler for merging extra properties
//! into a tracked event.

use std::sync::Arc;

use crate::domain::analytics::{AnalyticsEvent, Properties};
use crate::domain::foundation::{AnalyticsEventId, DomainError, DomainResult};
use crate::ports::AnalyticsEventRepository;

#[derive(Debug, Clone)]
pub struct EnrichAnalyticsEventCommand {
    pub event_id: String,
    /// Keys here replace existing ones
    pub properties: Properties,
}

pub struct EnrichAnalyticsEventHandler {
    repository: Arc<dyn AnalyticsEventRepository>,
}

impl EnrichAnalyticsEventHandler {
    pub fn new(repository: Arc<dyn AnalyticsEventRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EnrichAnalyticsEventCommand) -> DomainResult<AnalyticsEvent> {
        let id = AnalyticsEventId::new(cmd.event_id)?;
        let event = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found("AnalyticsEvent", &id))?;

        self.repository
            .update(&event.enrich_properties(cmd.properties))
            .await
    }
}
