//! DeleteEventHandler - Command handler for removing an event.

use std::sync::Arc;

use crate::domain::foundation::{DomainResult, EventId};
use crate::ports::EventRepository;

#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: String,
}

pub struct DeleteEventHandler {
    repository: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> DomainResult<()> {
        let event_id = EventId::new(cmd.event_id)?;
        self.repository.delete(&event_id).await?;
        tracing::debug!(event_id = %event_id, "Event deleted");
        Ok(())
    }
}
