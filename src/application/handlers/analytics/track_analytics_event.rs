//! TrackAnalyticsEventHandler - Command handler for recording a user action.

use std::sync::Arc;

use crate::domain::analytics::{AnalyticsEvent, EventName, Properties};
use crate::domain::foundation::{AnalyticsEventId, DomainResult, UserId};
use crate::ports::{AnalyticsEventRepository, Clock};

#[derive(Debug, Clone)]
pub struct TrackAnalyticsEventCommand {
    pub user_id: String,
    pub event_name: String,
    pub properties: Properties,
}

pub struct TrackAnalyticsEventHandler {
    repository: Arc<dyn AnalyticsEventRepository>,
    clock: Arc<dyn Clock>,
}

impl TrackAnalyticsEventHandler {
    pub fn new(repository: Arc<dyn AnalyticsEventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: TrackAnalyticsEventCommand) -> DomainResult<AnalyticsEvent> {
        let user_id = UserId::new(cmd.user_id)?;
        let event_name = EventName::new(cmd.event_name)?;

        let event = AnalyticsEvent::new(
            AnalyticsEventId::generate(),
            user_id,
            event_name,
            cmd.properties,
            self.clock.now(),
        );

        let saved = self.repository.save(&event).await?;
        tracing::debug!(event_name = %saved.event_name().value(), user_id = %saved.user_id(), "Analytics event tracked");
        Ok(saved)
    }
}
