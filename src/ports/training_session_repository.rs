//! Training session repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, Repository, TrainingSessionId};
use crate::domain::training::TrainingSession;

#[async_trait]
pub trait TrainingSessionRepository: Repository<TrainingSession, TrainingSessionId> {
    /// Sessions for a puppy ordered by session date.
    async fn find_by_puppy_id(
        &self,
        puppy_id: &PuppyId,
    ) -> Result<Vec<TrainingSession>, DomainError>;
}
