//! Puppy domain module.
//!
//! The `Puppy` aggregate and the value objects it is built from. Age-derived
//! queries (adulthood, feeding frequency) take the current time explicitly.

mod aggregate;
mod values;

pub use aggregate::{Puppy, ADULT_AGE_MONTHS};
pub use values::{BirthDate, Breed, PuppyName, Weight, WeightUnit, KG_PER_LB, MAX_NAME_LENGTH};
