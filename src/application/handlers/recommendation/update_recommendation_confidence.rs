//! UpdateRecommendationConfidenceHandler - Command handler for re-scoring a recommendation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainResult, RecommendationId};
use crate::domain::recommendation::AIRecommendation;
use crate::ports::{Clock, RecommendationRepository};

#[derive(Debug, Clone)]
pub struct UpdateRecommendationConfidenceCommand {
    pub recommendation_id: String,
    pub confidence: f64,
}

pub struct UpdateRecommendationConfidenceHandler {
    repository: Arc<dyn RecommendationRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateRecommendationConfidenceHandler {
    pub fn new(repository: Arc<dyn RecommendationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRecommendationConfidenceCommand,
    ) -> DomainResult<AIRecommendation> {
        let id = RecommendationId::new(cmd.recommendation_id)?;
        let recommendation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found("AIRecommendation", &id))?;

        let updated = recommendation.update_confidence(cmd.confidence, self.clock.now())?;
        self.repository.update(&updated).await
    }
}
