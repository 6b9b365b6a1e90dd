//! Analytics command handlers.

mod enrich_analytics_event;
mod track_analytics_event;

pub use enrich_analytics_event::{EnrichAnalyticsEventCommand, EnrichAnalyticsEventHandler};
pub use track_analytics_event::{TrackAnalyticsEventCommand, TrackAnalyticsEventHandler};
