//! In-memory puppy repository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, UserId};
use crate::domain::puppy::Puppy;
use crate::ports::PuppyRepository;

memory_repository!(InMemoryPuppyRepository, Puppy, PuppyId, "Puppy");

#[async_trait]
impl PuppyRepository for InMemoryPuppyRepository {
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Puppy>, DomainError> {
        Ok(self.store.filter(|p| p.is_owned_by(owner_id)).await)
    }
}
