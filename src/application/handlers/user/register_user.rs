//! RegisterUserHandler - Command handler for creating an account.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, UserId};
use crate::domain::user::{Email, User, UserRole};
use crate::ports::{Clock, UserRepository};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    /// Defaults to `user` when absent
    pub role: Option<String>,
}

pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// # Errors
    ///
    /// - `VALIDATION_ERROR` for a malformed email or unknown role
    /// - `CONFLICT` if the email is already registered
    pub async fn handle(&self, cmd: RegisterUserCommand) -> DomainResult<User> {
        let email = Email::new(cmd.email)?;
        let role = cmd
            .role
            .as_deref()
            .map(str::parse::<UserRole>)
            .transpose()?
            .unwrap_or_default();

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "User with email {} already exists",
                email.value()
            ))
            .with_detail("email", email.value()));
        }

        let user = User::new(UserId::generate(), email, role, self.clock.now());
        let saved = self.repository.save(&user).await?;
        tracing::debug!(user_id = %saved.id(), role = %saved.role(), "User registered");
        Ok(saved)
    }
}
