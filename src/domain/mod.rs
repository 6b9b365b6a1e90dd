//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, results, IDs, timestamps)
//! - `puppy` - Puppy aggregate, age and weight rules
//! - `calendar` - Events, recurrence and the vaccination timeline
//! - `user` - Account holders and household roles
//! - `training` - Training session records
//! - `recommendation` - AI care recommendations
//! - `analytics` - Product analytics events

pub mod analytics;
pub mod calendar;
pub mod foundation;
pub mod puppy;
pub mod recommendation;
pub mod training;
pub mod user;
