use super::recommendations_model::{ImpactLevel, Recommendation, RecommendationCategory};
use super::recommendations_traits::RecommendationServiceTrait;

/// Serves the fixed recommendation catalogue.
pub struct RecommendationService {
    catalogue: Vec<Recommendation>,
}

impl RecommendationService {
    pub fn new() -> Self {
        RecommendationService {
            catalogue: default_catalogue(),
        }
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationServiceTrait for RecommendationService {
    fn get_recommendations(&self) -> Vec<Recommendation> {
        self.catalogue.clone()
    }

    fn get_recommendations_for(&self, category: RecommendationCategory) -> Vec<Recommendation> {
        self.catalogue
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }
}

fn default_catalogue() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "switch-to-ev".to_string(),
            title: "Switch to Electric Vehicle".to_string(),
            description:
                "Consider switching to an electric vehicle to reduce emissions by up to 50%"
                    .to_string(),
            impact: ImpactLevel::High,
            category: RecommendationCategory::Transport,
        },
        Recommendation {
            id: "plant-trees".to_string(),
            title: "Plant Trees".to_string(),
            description: "Participate in local tree planting initiatives or donate to reforestation projects".to_string(),
            impact: ImpactLevel::Medium,
            category: RecommendationCategory::Offsetting,
        },
        Recommendation {
            id: "renewable-energy".to_string(),
            title: "Renewable Energy".to_string(),
            description: "Switch to a renewable energy provider for your home electricity"
                .to_string(),
            impact: ImpactLevel::High,
            category: RecommendationCategory::Energy,
        },
    ]
}
