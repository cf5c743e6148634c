use crate::recommendations::recommendations_model::{Recommendation, RecommendationCategory};

/// Trait for recommendation service operations
pub trait RecommendationServiceTrait: Send + Sync {
    fn get_recommendations(&self) -> Vec<Recommendation>;
    fn get_recommendations_for(&self, category: RecommendationCategory) -> Vec<Recommendation>;
}
