//! RecordTrainingSessionHandler - Command handler for logging a training session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, PuppyId, Timestamp, TrainingSessionId};
use crate::domain::training::{SessionDuration, Skill, SuccessRate, TrainingSession};
use crate::ports::{Clock, TrainingSessionRepository};

#[derive(Debug, Clone)]
pub struct RecordTrainingSessionCommand {
    pub puppy_id: String,
    pub skill: String,
    pub duration_minutes: i64,
    /// Percentage, 0-100
    pub success_rate: i64,
    pub notes: Option<String>,
    /// Defaults to now when absent
    pub session_date: Option<String>,
}

pub struct RecordTrainingSessionHandler {
    repository: Arc<dyn TrainingSessionRepository>,
    clock: Arc<dyn Clock>,
}

impl RecordTrainingSessionHandler {
    pub fn new(repository: Arc<dyn TrainingSessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: RecordTrainingSessionCommand) -> DomainResult<TrainingSession> {
        let now = self.clock.now();

        let puppy_id = PuppyId::new(cmd.puppy_id)?;
        let skill = Skill::new(cmd.skill)?;
        let duration = SessionDuration::new(cmd.duration_minutes)?;
        let success_rate = SuccessRate::new(cmd.success_rate)?;
        let session_date = match cmd.session_date {
            Some(raw) => Timestamp::parse(&raw).ok_or_else(|| {
                DomainError::validation("TrainingSession date must be a valid date")
            })?,
            None => now,
        };

        let session = TrainingSession::new(
            TrainingSessionId::generate(),
            puppy_id,
            skill,
            duration,
            success_rate,
            cmd.notes,
            session_date,
            now,
        );

        let saved = self.repository.save(&session).await?;
        tracing::debug!(session_id = %saved.id(), puppy_id = %saved.puppy_id(), "Training session recorded");
        Ok(saved)
    }
}
