//! In-memory training session repository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, TrainingSessionId};
use crate::domain::training::TrainingSession;
use crate::ports::TrainingSessionRepository;

memory_repository!(
    InMemoryTrainingSessionRepository,
    TrainingSession,
    TrainingSessionId,
    "TrainingSession"
);

#[async_trait]
impl TrainingSessionRepository for InMemoryTrainingSessionRepository {
    async fn find_by_puppy_id(
        &self,
        puppy_id: &PuppyId,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let mut sessions = self.store.filter(|s| s.puppy_id() == puppy_id).await;
        sessions.sort_by_key(|s| *s.session_date());
        Ok(sessions)
    }
}
