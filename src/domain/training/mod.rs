//! Training domain module.

mod aggregate;

pub use aggregate::{
    SessionDuration, Skill, SuccessRate, TrainingSession, MAX_DURATION_MINUTES, MAX_SKILL_LENGTH,
};
