//! UpdatePuppyWeightHandler - Command handler for recording a new weight.
//!
//! The unit is stored exactly as supplied; no conversion is applied.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, PuppyId};
use crate::domain::puppy::{Puppy, Weight, WeightUnit};
use crate::ports::{Clock, PuppyRepository};

#[derive(Debug, Clone)]
pub struct UpdatePuppyWeightCommand {
    pub puppy_id: String,
    pub weight: f64,
    pub unit: String,
}

pub struct UpdatePuppyWeightHandler {
    repository: Arc<dyn PuppyRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdatePuppyWeightHandler {
    pub fn new(repository: Arc<dyn PuppyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: UpdatePuppyWeightCommand) -> DomainResult<Puppy> {
        let puppy_id = PuppyId::new(cmd.puppy_id)?;
        let puppy = self
            .repository
            .find_by_id(&puppy_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Puppy", &puppy_id))?;

        let unit = cmd.unit.parse::<WeightUnit>()?;
        let weight = Weight::new(cmd.weight, unit)?;

        let updated = self
            .repository
            .update(&puppy.with_weight(weight, self.clock.now()))
            .await?;
        tracing::debug!(puppy_id = %puppy_id, weight = weight.value(), unit = %unit, "Puppy weight updated");
        Ok(updated)
    }
}
