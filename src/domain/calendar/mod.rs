//! Calendar domain module.
//!
//! Events scheduled for a puppy, the recurrence rules that repeat them and
//! the vaccination timeline generated from a birth date.

mod aggregate;
mod recurrence;
mod vaccination;
mod values;

pub use aggregate::Event;
pub use recurrence::{RecurrenceFrequency, RecurringPattern, MAX_INTERVAL};
pub use vaccination::{PlannedVaccination, VaccinationSchedule, VaccineDose, CORE_PUPPY_DOSES};
pub use values::{
    EventDateTime, EventDescription, EventTitle, EventType, UrgencyLevel,
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
