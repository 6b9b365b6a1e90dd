//! In-memory analytics event repository.

use async_trait::async_trait;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::{AnalyticsEventId, DomainError, UserId};
use crate::ports::AnalyticsEventRepository;

memory_repository!(
    InMemoryAnalyticsEventRepository,
    AnalyticsEvent,
    AnalyticsEventId,
    "AnalyticsEvent"
);

#[async_trait]
impl AnalyticsEventRepository for InMemoryAnalyticsEventRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<AnalyticsEvent>, DomainError> {
        Ok(self.store.filter(|e| e.user_id() == user_id).await)
    }
}
