//! CreatePuppyHandler - Command handler for registering a puppy.

use std::sync::Arc;

use crate::domain::foundation::{DomainResult, PuppyId, UserId};
use crate::domain::puppy::{BirthDate, Breed, Puppy, PuppyName, Weight, WeightUnit};
use crate::ports::{Clock, PuppyRepository};

/// Command to register a new puppy.
#[derive(Debug, Clone)]
pub struct CreatePuppyCommand {
    pub name: String,
    pub breed: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub birth_date: String,
    pub weight: f64,
    /// `kg` or `lbs`
    pub weight_unit: String,
    pub owner_id: String,
}

/// Handler for creating puppies.
pub struct CreatePuppyHandler {
    repository: Arc<dyn PuppyRepository>,
    clock: Arc<dyn Clock>,
}

impl CreatePuppyHandler {
    pub fn new(repository: Arc<dyn PuppyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Validates every field in declaration order, stopping at the first
    /// failure, then persists the new puppy.
    pub async fn handle(&self, cmd: CreatePuppyCommand) -> DomainResult<Puppy> {
        let now = self.clock.now();

        let name = PuppyName::new(cmd.name)?;
        let breed = Breed::new(cmd.breed)?;
        let birth_date = BirthDate::new(&cmd.birth_date, now)?;
        let unit = cmd.weight_unit.parse::<WeightUnit>()?;
        let weight = Weight::new(cmd.weight, unit)?;
        let owner_id = UserId::new(cmd.owner_id)?;

        let puppy = Puppy::new(
            PuppyId::generate(),
            name,
            breed,
            birth_date,
            weight,
            owner_id,
            now,
        );

        let saved = self.repository.save(&puppy).await?;
        tracing::debug!(puppy_id = %saved.id(), owner_id = %saved.owner_id(), "Puppy created");
        Ok(saved)
    }
}
