//! Age-based vaccination timeline.
//!
//! Doses sit at fixed week offsets from the birth date. Only doses still
//! ahead of `now` are planned; past doses are dropped rather than reported
//! as overdue.

use super::{Event, EventDateTime, EventDescription, EventTitle, EventType};
use crate::domain::foundation::{DomainResult, EventId, PuppyId, Timestamp};
use crate::domain::puppy::{BirthDate, Breed};

/// One dose in a vaccination schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineDose {
    pub name: &'static str,
    pub weeks_after_birth: i64,
    pub description: &'static str,
}

/// Core puppy series: three DHPP boosters and rabies.
pub const CORE_PUPPY_DOSES: [VaccineDose; 4] = [
    VaccineDose {
        name: "First DHPP",
        weeks_after_birth: 6,
        description: "Distemper, hepatitis, parvovirus and parainfluenza, first dose",
    },
    VaccineDose {
        name: "Second DHPP",
        weeks_after_birth: 9,
        description: "Distemper, hepatitis, parvovirus and parainfluenza, second dose",
    },
    VaccineDose {
        name: "Third DHPP",
        weeks_after_birth: 12,
        description: "Distemper, hepatitis, parvovirus and parainfluenza, third dose",
    },
    VaccineDose {
        name: "Rabies",
        weeks_after_birth: 16,
        description: "Rabies vaccination",
    },
];

/// Ordered set of doses for a puppy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinationSchedule {
    doses: Vec<VaccineDose>,
}

impl VaccinationSchedule {
    /// Schedule for the given breed.
    ///
    /// Every breed currently receives the core series.
    pub fn for_breed(_breed: &Breed) -> Self {
        Self {
            doses: CORE_PUPPY_DOSES.to_vec(),
        }
    }

    pub fn doses(&self) -> &[VaccineDose] {
        &self.doses
    }

    /// Doses due strictly after `now`, in schedule order.
    pub fn upcoming(&self, birth_date: &BirthDate, now: Timestamp) -> Vec<PlannedVaccination> {
        self.doses
            .iter()
            .map(|dose| PlannedVaccination {
                dose: *dose,
                due_at: birth_date.value().plus_weeks(dose.weeks_after_birth),
            })
            .filter(|planned| planned.due_at.is_after(&now))
            .collect()
    }
}

/// A dose pinned to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedVaccination {
    pub dose: VaccineDose,
    pub due_at: Timestamp,
}

impl PlannedVaccination {
    /// Materializes the dose as a vaccination event for `puppy_id`.
    pub fn to_event(&self, id: EventId, puppy_id: &PuppyId, now: Timestamp) -> DomainResult<Event> {
        Ok(Event::new(
            id,
            EventTitle::new(format!("{} vaccination", self.dose.name))?,
            EventDescription::new(self.dose.description)?,
            EventDateTime::from_timestamp(self.due_at),
            EventType::Vaccination,
            puppy_id.clone(),
            None,
            now,
        ))
    }
}
