//! Puppy command and query handlers.

mod create_puppy;
mod delete_puppy;
mod get_puppy;
mod list_owner_puppies;
mod update_puppy_weight;

pub use create_puppy::{CreatePuppyCommand, CreatePuppyHandler};
pub use delete_puppy::{DeletePuppyCommand, DeletePuppyHandler};
pub use get_puppy::{GetPuppyHandler, GetPuppyQuery, PuppyProfile};
pub use list_owner_puppies::{ListOwnerPuppiesHandler, ListOwnerPuppiesQuery};
pub use update_puppy_weight::{UpdatePuppyWeightCommand, UpdatePuppyWeightHandler};
