//! Puppy Care - puppy management backend
//!
//! Puppies, calendar events with recurrence, age-based vaccination
//! timelines, training sessions, AI recommendations and analytics events,
//! persisted in memory or in PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod container;
pub mod domain;
pub mod ports;
pub mod telemetry;
