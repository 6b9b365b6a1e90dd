//! Analytics event repository port.

use async_trait::async_trait;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::{AnalyticsEventId, DomainError, Repository, UserId};

#[async_trait]
pub trait AnalyticsEventRepository: Repository<AnalyticsEvent, AnalyticsEventId> {
    /// Events recorded for a user, oldest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<AnalyticsEvent>, DomainError>;
}
