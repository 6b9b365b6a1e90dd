//! Puppy repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, Repository, UserId};
use crate::domain::puppy::Puppy;

/// Repository port for Puppy aggregate persistence.
#[async_trait]
pub trait PuppyRepository: Repository<Puppy, PuppyId> {
    /// Find every puppy owned by a user, oldest record first.
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Puppy>, DomainError>;
}
