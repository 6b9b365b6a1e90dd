//! In-memory AI recommendation repository.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, RecommendationId};
use crate::domain::recommendation::AIRecommendation;
use crate::ports::RecommendationRepository;

memory_repository!(
    InMemoryRecommendationRepository,
    AIRecommendation,
    RecommendationId,
    "Recommendation"
);

#[async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn find_by_puppy_id(
        &self,
        puppy_id: &PuppyId,
    ) -> Result<Vec<AIRecommendation>, DomainError> {
        Ok(self.store.filter(|r| r.puppy_id() == puppy_id).await)
    }
}
