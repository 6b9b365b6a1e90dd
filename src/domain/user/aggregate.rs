//! User aggregate entity.

use serde::Serialize;

use super::{Email, UserRole};
use crate::domain::foundation::{Timestamp, UserId};

/// Account holder who owns puppies or helps care for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: Email,
    role: UserRole,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Creates an active user at `now`.
    pub fn new(id: UserId, email: Email, role: UserRole, now: Timestamp) -> Self {
        Self {
            id,
            email,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(
        id: UserId,
        email: Email,
        role: UserRole,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            role,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Admins and primary users may invite or remove family members.
    pub fn can_manage_family(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::User)
    }

    pub fn change_role(&self, role: UserRole, now: Timestamp) -> Self {
        Self {
            role,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn deactivate(&self, now: Timestamp) -> Self {
        Self {
            is_active: false,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn activate(&self, now: Timestamp) -> Self {
        Self {
            is_active: true,
            updated_at: now,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(day: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 4, day, 0, 0, 0).unwrap())
    }

    fn user(role: UserRole) -> User {
        User::new(
            UserId::new("user-1").unwrap(),
            Email::new("owner@example.com").unwrap(),
            role,
            at(1),
        )
    }

    #[test]
    fn new_user_is_active() {
        let user = user(UserRole::User);
        assert!(user.is_active());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn role_queries() {
        assert!(user(UserRole::Admin).is_admin());
        assert!(user(UserRole::Admin).can_manage_family());
        assert!(user(UserRole::User).can_manage_family());
        assert!(!user(UserRole::User).is_admin());
        assert!(!user(UserRole::FamilyMember).can_manage_family());
    }

    #[test]
    fn deactivate_and_reactivate_return_new_instances() {
        let original = user(UserRole::User);
        let inactive = original.deactivate(at(2));
        let active_again = inactive.activate(at(3));

        assert!(original.is_active());
        assert!(!inactive.is_active());
        assert_eq!(inactive.updated_at(), &at(2));
        assert!(active_again.is_active());
        assert_eq!(active_again.created_at(), original.created_at());
    }

    #[test]
    fn change_role_keeps_identity() {
        let promoted = user(UserRole::FamilyMember).change_role(UserRole::Admin, at(5));
        assert!(promoted.is_admin());
        assert_eq!(promoted.id().as_str(), "user-1");
        assert_eq!(promoted.email().value(), "owner@example.com");
    }
}
