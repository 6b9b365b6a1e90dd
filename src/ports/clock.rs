//! Clock port.
//!
//! Domain queries never read the system time themselves; handlers ask the
//! injected clock once per call and pass the instant down.

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
