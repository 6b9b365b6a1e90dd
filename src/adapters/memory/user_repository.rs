//! In-memory user repository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Email, User};
use crate::ports::UserRepository;

memory_repository!(InMemoryUserRepository, User, UserId, "User");

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Ok(self.store.filter(|u| u.email() == email).await.into_iter().next())
    }
}
