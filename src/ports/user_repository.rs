//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Repository, UserId};
use crate::domain::user::{Email, User};

/// Repository port for User aggregate persistence.
#[async_trait]
pub trait UserRepository: Repository<User, UserId> {
    /// Exact, case-sensitive email lookup.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;
}
