//! CreateRecommendationHandler - Command handler for storing an AI recommendation.

use std::sync::Arc;

use crate::domain::foundation::{DomainResult, PuppyId, RecommendationId};
use crate::domain::recommendation::{
    AIRecommendation, Confidence, RecommendationContent, RecommendationType,
};
use crate::ports::{Clock, RecommendationRepository};

#[derive(Debug, Clone)]
pub struct CreateRecommendationCommand {
    pub puppy_id: String,
    pub recommendation_type: String,
    pub content: String,
    pub confidence: f64,
}

pub struct CreateRecommendationHandler {
    repository: Arc<dyn RecommendationRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateRecommendationHandler {
    pub fn new(repository: Arc<dyn RecommendationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: CreateRecommendationCommand) -> DomainResult<AIRecommendation> {
        let puppy_id = PuppyId::new(cmd.puppy_id)?;
        let recommendation_type: RecommendationType = cmd.recommendation_type.parse()?;
        let content = RecommendationContent::new(cmd.content)?;
        let confidence = Confidence::new(cmd.confidence)?;

        let recommendation = AIRecommendation::new(
            RecommendationId::generate(),
            puppy_id,
            recommendation_type,
            content,
            confidence,
            self.clock.now(),
        );

        let saved = self.repository.save(&recommendation).await?;
        tracing::debug!(
            recommendation_id = %saved.id(),
            recommendation_type = %saved.recommendation_type(),
            high_confidence = saved.is_high_confidence(),
            "Recommendation created"
        );
        Ok(saved)
    }
}
