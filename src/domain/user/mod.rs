//! User domain module.
//!
//! Account holders, their email identity and household role.

mod aggregate;
mod values;

pub use aggregate::User;
pub use values::{Email, UserRole};
