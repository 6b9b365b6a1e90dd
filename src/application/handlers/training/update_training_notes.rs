//! UpdateTrainingNotesHandler - Command handler for editing session notes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, TrainingSessionId};
use crate::domain::training::TrainingSession;
use crate::ports::{Clock, TrainingSessionRepository};

#[derive(Debug, Clone)]
pub struct UpdateTrainingNotesCommand {
    pub session_id: String,
    /// `None` or blank clears the notes
    pub notes: Option<String>,
}

pub struct UpdateTrainingNotesHandler {
    repository: Arc<dyn TrainingSessionRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateTrainingNotesHandler {
    pub fn new(repository: Arc<dyn TrainingSessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: UpdateTrainingNotesCommand) -> DomainResult<TrainingSession> {
        let session_id = TrainingSessionId::new(cmd.session_id)?;
        let session = self
            .repository
            .find_by_id(&session_id)
            .await?
            .ok_or_else(|| DomainError::not_found("TrainingSession", &session_id))?;

        self.repository
            .update(&session.update_notes(cmd.notes, self.clock.now()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryTrainingSessionRepository};
    use crate::application::handlers::test_support::now;
    use crate::application::handlers::training::{
        RecordTrainingSessionCommand, RecordTrainingSessionHandler,
    };
    use crate::domain::foundation::ErrorCode;

    async fn recorded(
        repo: &Arc<InMemoryTrainingSessionRepository>,
        clock: &Arc<FixedClock>,
    ) -> TrainingSession {
        RecordTrainingSessionHandler::new(repo.clone(), clock.clone())
            .handle(RecordTrainingSessionCommand {
                puppy_id: "pup-1".to_string(),
                skill: "Sit".to_string(),
                duration_minutes: 10,
                success_rate: 90,
                notes: None,
                session_date: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn replaces_notes() {
        let repo = Arc::new(InMemoryTrainingSessionRepository::new());
        let clock = Arc::new(FixedClock::new(now()));
        let session = recorded(&repo, &clock).await;
        clock.advance_days(1);

        let updated = UpdateTrainingNotesHandler::new(repo, clock)
            .handle(UpdateTrainingNotesCommand {
                session_id: session.id().to_string(),
                notes: Some("Nailed it".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.notes(), Some("Nailed it"));
        assert_eq!(updated.skill(), session.skill());
        assert_eq!(updated.updated_at(), &now().plus_days(1));
    }

    #[tokio::test]
    async fn blank_notes_clear() {
        let repo = Arc::new(InMemoryTrainingSessionRepository::new());
        let clock = Arc::new(FixedClock::new(now()));
        let session = recorded(&repo, &clock).await;

        let updated = UpdateTrainingNotesHandler::new(repo, clock)
            .handle(UpdateTrainingNotesCommand {
                session_id: session.id().to_string(),
                notes: Some("   ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.notes(), None);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repo = Arc::new(InMemoryTrainingSessionRepository::new());
        let err = UpdateTrainingNotesHandler::new(repo, Arc::new(FixedClock::new(now())))
            .handle(UpdateTrainingNotesCommand {
                session_id: "ts-1".to_string(),
                notes: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
