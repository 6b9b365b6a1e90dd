//! AI recommendation repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PuppyId, RecommendationId, Repository};
use crate::domain::recommendation::AIRecommendation;

#[async_trait]
pub trait RecommendationRepository: Repository<AIRecommendation, RecommendationId> {
    async fn find_by_puppy_id(
        &self,
        puppy_id: &PuppyId,
    ) -> Result<Vec<AIRecommendation>, DomainError>;
}
