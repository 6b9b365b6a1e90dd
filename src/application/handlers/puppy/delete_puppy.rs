//! DeletePuppyHandler - Command handler for removing a puppy.
//!
//! Events that reference the puppy are left in place.

use std::sync::Arc;

use crate::domain::foundation::{DomainResult, PuppyId};
use crate::ports::PuppyRepository;

#[derive(Debug, Clone)]
pub struct DeletePuppyCommand {
    pub puppy_id: String,
}

pub struct DeletePuppyHandler {
    repository: Arc<dyn PuppyRepository>,
}

impl DeletePuppyHandler {
    pub fn new(repository: Arc<dyn PuppyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePuppyCommand) -> DomainResult<()> {
        let puppy_id = PuppyId::new(cmd.puppy_id)?;
        self.repository.delete(&puppy_id).await?;
        tracing::debug!(puppy_id = %puppy_id, "Puppy deleted");
        Ok(())
    }
}
