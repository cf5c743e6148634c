//! Recommendations module - static eco-friendly suggestions.

mod recommendations_model;
mod recommendations_service;
mod recommendations_traits;

pub use recommendations_model::{ImpactLevel, Recommendation, RecommendationCategory};
pub use recommendations_service::RecommendationService;
pub use recommendations_traits::RecommendationServiceTrait;
