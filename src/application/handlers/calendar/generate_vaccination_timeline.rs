//! GenerateVaccinationTimelineHandler - Plans a puppy's remaining vaccinations.
//!
//! Events are saved one at a time with no rollback. If a save fails, the
//! events saved before it stay in the repository and the failure is returned.

use std::sync::Arc;

use crate::domain::calendar::{Event, VaccinationSchedule};
use crate::domain::foundation::{DomainResult, EventId, PuppyId};
use crate::domain::puppy::{BirthDate, Breed};
use crate::ports::{Clock, EventRepository};

#[derive(Debug, Clone)]
pub struct GenerateVaccinationTimelineCommand {
    pub puppy_id: String,
    pub breed: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub birth_date: String,
}

pub struct GenerateVaccinationTimelineHandler {
    repository: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl GenerateVaccinationTimelineHandler {
    pub fn new(repository: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Returns the saved vaccination events in due-date order. A puppy past
    /// every dose gets an empty list, not an error.
    pub async fn handle(&self, cmd: GenerateVaccinationTimelineCommand) -> DomainResult<Vec<Event>> {
        let now = self.clock.now();

        let puppy_id = PuppyId::new(cmd.puppy_id)?;
        let breed = Breed::new(cmd.breed)?;
        let birth_date = BirthDate::new(&cmd.birth_date, now)?;

        let planned = VaccinationSchedule::for_breed(&breed).upcoming(&birth_date, now);

        let mut saved = Vec::with_capacity(planned.len());
        for dose in &planned {
            let event = dose.to_event(EventId::generate(), &puppy_id, now)?;
            match self.repository.save(&event).await {
                Ok(event) => saved.push(event),
                Err(err) => {
                    tracing::warn!(
                        puppy_id = %puppy_id,
                        saved = saved.len(),
                        planned = planned.len(),
                        error = %err,
                        "Vaccination timeline partially saved"
                    );
                    return Err(err);
                }
            }
        }

        tracing::debug!(puppy_id = %puppy_id, count = saved.len(), "Vaccination timeline generated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEventRepository;
    use crate::application::handlers::test_support::{
        clock, days_from_now, now, FlakyEventRepository,
    };
    use crate::domain::calendar::EventType;
    use crate::domain::foundation::ErrorCode;

    fn command(birth_date: String) -> GenerateVaccinationTimelineCommand {
        GenerateVaccinationTimelineCommand {
            puppy_id: "pup-1".to_string(),
            breed: "Border Collie".to_string(),
            birth_date,
        }
    }

    #[tokio::test]
    async fn newborn_gets_all_four_vaccinations() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let handler = GenerateVaccinationTimelineHandler::new(repo.clone(), clock());

        let events = handler.handle(command(days_from_now(-1))).await.unwrap();

        let titles: Vec<_> = events.iter().map(|e| e.title().value()).collect();
        assert_eq!(
            titles,
            vec![
                "First DHPP vaccination",
                "Second DHPP vaccination",
                "Third DHPP vaccination",
                "Rabies vaccination",
            ]
        );
        assert!(events.iter().all(|e| e.event_type() == EventType::Vaccination));
        assert!(events.iter().all(|e| e.is_upcoming(now())));
        assert_eq!(
            events[0].event_date_time().value(),
            now().minus_days(1).plus_weeks(6)
        );
        assert_eq!(repo.len().await, 4);
    }

    #[tokio::test]
    async fn two_year_old_gets_empty_success() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let handler = GenerateVaccinationTimelineHandler::new(repo.clone(), clock());

        let events = handler.handle(command(days_from_now(-730))).await.unwrap();

        assert!(events.is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn any_breed_gets_the_same_schedule() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let handler = GenerateVaccinationTimelineHandler::new(repo, clock());

        let collie = handler.handle(command(days_from_now(-1))).await.unwrap();
        let chihuahua = handler
            .handle(GenerateVaccinationTimelineCommand {
                puppy_id: "pup-2".to_string(),
                breed: "Chihuahua".to_string(),
                birth_date: days_from_now(-1),
            })
            .await
            .unwrap();

        let dates = |events: &[Event]| -> Vec<_> {
            events.iter().map(|e| e.event_date_time().value()).collect()
        };
        assert_eq!(dates(&collie), dates(&chihuahua));
    }

    #[tokio::test]
    async fn failed_save_keeps_earlier_events() {
        let repo = Arc::new(FlakyEventRepository::failing_after(2));
        let handler = GenerateVaccinationTimelineHandler::new(repo.clone(), clock());

        let err = handler.handle(command(days_from_now(-1))).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(repo.inner.len().await, 2);
    }

    #[tokio::test]
    async fn invalid_input_saves_nothing() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let handler = GenerateVaccinationTimelineHandler::new(repo.clone(), clock());

        let err = handler
            .handle(GenerateVaccinationTimelineCommand {
                breed: " ".to_string(),
                ..command(days_from_now(-1))
            })
            .await
            .unwrap_err();

        assert_eq!(err.message, "Breed cannot be empty");
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn future_birth_date_is_rejected() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let handler = GenerateVaccinationTimelineHandler::new(repo, clock());

        let err = handler.handle(command(days_from_now(2))).await.unwrap_err();
        assert_eq!(err.message, "BirthDate cannot be in the future");
    }
}
