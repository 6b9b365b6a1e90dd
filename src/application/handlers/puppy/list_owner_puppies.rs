//! ListOwnerPuppiesHandler - Query handler for an owner's puppies.

use std::sync::Arc;

use crate::domain::foundation::{DomainResult, UserId};
use crate::domain::puppy::Puppy;
use crate::ports::PuppyRepository;

#[derive(Debug, Clone)]
pub struct ListOwnerPuppiesQuery {
    pub owner_id: String,
}

pub struct ListOwnerPuppiesHandler {
    repository: Arc<dyn PuppyRepository>,
}

impl ListOwnerPuppiesHandler {
    pub fn new(repository: Arc<dyn PuppyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListOwnerPuppiesQuery) -> DomainResult<Vec<Puppy>> {
        let owner_id = UserId::new(query.owner_id)?;
        self.repository.find_by_owner(&owner_id).await
    }
}
