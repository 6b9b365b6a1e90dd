//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use puppy_care::adapters::FixedClock;
use puppy_care::container::{AppContainer, Repositories};
use puppy_care::domain::foundation::Timestamp;

/// 2024-06-01T12:00:00Z
pub fn now() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

pub fn days_from_now(days: i64) -> String {
    now().plus_days(days).as_datetime().to_rfc3339()
}

/// In-memory container on a clock pinned at `now()`.
pub fn container() -> (AppContainer, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now()));
    let container = AppContainer::with_repositories(Repositories::in_memory(), clock.clone());
    (container, clock)
}
