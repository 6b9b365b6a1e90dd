//! GetPuppyHandler - Query handler for a single puppy.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, PuppyId};
use crate::domain::puppy::Puppy;
use crate::ports::{Clock, PuppyRepository};

/// Query to get a puppy by ID.
#[derive(Debug, Clone)]
pub struct GetPuppyQuery {
    pub puppy_id: String,
}

/// A puppy with its age-derived facts evaluated at query time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuppyProfile {
    pub puppy: Puppy,
    pub age_in_weeks: i64,
    pub age_in_months: i64,
    pub is_adult: bool,
    pub feeding_frequency: u8,
}

/// Handler for retrieving a puppy.
pub struct GetPuppyHandler {
    repository: Arc<dyn PuppyRepository>,
    clock: Arc<dyn Clock>,
}

impl GetPuppyHandler {
    pub fn new(repository: Arc<dyn PuppyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: GetPuppyQuery) -> DomainResult<PuppyProfile> {
        let puppy_id = PuppyId::new(query.puppy_id)?;
        let puppy = self
            .repository
            .find_by_id(&puppy_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Puppy", &puppy_id))?;

        let now = self.clock.now();
        Ok(PuppyProfile {
            age_in_weeks: puppy.birth_date().age_in_weeks(now),
            age_in_months: puppy.birth_date().age_in_months(now),
            is_adult: puppy.is_adult(now),
            feeding_frequency: puppy.feeding_frequency(now),
            puppy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPuppyRepository;
    use crate::application::handlers::test_support::{clock, now};
    use crate::domain::foundation::{ErrorCode, Repository, UserId};
    use crate::domain::puppy::{BirthDate, Breed, PuppyName, Weight, WeightUnit};

    async fn seeded(birth: &str) -> Arc<InMemoryPuppyRepository> {
        let repo = Arc::new(InMemoryPuppyRepository::new());
        let puppy = Puppy::new(
            PuppyId::new("pup-1").unwrap(),
            PuppyName::new("Mochi").unwrap(),
            Breed::new("Shiba Inu").unwrap(),
            BirthDate::new(birth, now()).unwrap(),
            Weight::new(6.0, WeightUnit::Kg).unwrap(),
            UserId::new("owner-1").unwrap(),
            now(),
        );
        repo.save(&puppy).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn returns_profile_with_derived_facts() {
        let repo = seeded("2024-02-15").await;
        let handler = GetPuppyHandler::new(repo, clock());

        let profile = handler
            .handle(GetPuppyQuery {
                puppy_id: "pup-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(profile.puppy.name().value(), "Mochi");
        assert_eq!(profile.age_in_months, 3);
        assert_eq!(profile.feeding_frequency, 3);
        assert!(!profile.is_adult);
    }

    #[tokio::test]
    async fn missing_puppy_is_not_found() {
        let repo = seeded("2024-02-15").await;
        let handler = GetPuppyHandler::new(repo, clock());

        let err = handler
            .handle(GetPuppyQuery {
                puppy_id: "pup-404".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Puppy with id pup-404 not found");
    }
}
