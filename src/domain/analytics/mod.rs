//! Analytics domain module.

mod aggregate;

pub use aggregate::{AnalyticsEvent, EventName, Properties, MAX_EVENT_NAME_LENGTH};
