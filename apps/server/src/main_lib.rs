use std::sync::Arc;

use crate::config::Config;
use ecotracker_air_quality::{AirQualityProvider, RapidApiAirQualityProvider};
use ecotracker_core::{
    footprint::{EmissionFactors, FootprintService, FootprintServiceTrait},
    leaderboard::{LeaderboardService, LeaderboardServiceTrait},
    recommendations::{RecommendationService, RecommendationServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub footprint_service: Arc<dyn FootprintServiceTrait>,
    pub recommendation_service: Arc<dyn RecommendationServiceTrait>,
    pub leaderboard_service: Arc<dyn LeaderboardServiceTrait>,
    pub air_quality_provider: Arc<dyn AirQualityProvider>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ECO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = RapidApiAirQualityProvider::with_options(
        config.rapidapi_key.clone(),
        &config.air_quality_base_url,
        config.air_quality_timeout,
    );
    if !provider.has_api_key() {
        tracing::warn!("RAPIDAPI_KEY is not set; /api/air-quality will answer with 500");
    }
    build_state_with_provider(Arc::new(provider))
}

/// Builds the state around an already constructed air quality provider.
pub fn build_state_with_provider(
    air_quality_provider: Arc<dyn AirQualityProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let footprint_service: Arc<dyn FootprintServiceTrait> =
        Arc::new(FootprintService::with_factors(EmissionFactors::DEFAULT)?);
    tracing::info!(
        "Footprint calculator ready; air quality provider: {}",
        air_quality_provider.id()
    );

    Ok(Arc::new(AppState {
        footprint_service,
        recommendation_service: Arc::new(RecommendationService::new()),
        leaderboard_service: Arc::new(LeaderboardService::new()),
        air_quality_provider,
    }))
}
