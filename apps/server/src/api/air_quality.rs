use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use ecotracker_air_quality::PollutantReadings;
use serde_json::Value;

/// Relays the provider's health index. Callers cannot pass readings.
#[utoipa::path(
    get,
    path = "/api/air-quality",
    responses(
        (status = 200, description = "Provider response, unchanged"),
        (status = 500, description = "Failed to fetch air quality data")
    )
)]
pub async fn get_air_quality(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let provider = &state.air_quality_provider;
    let payload = provider
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .inspect_err(|e| {
            tracing::error!(provider = provider.id(), "Air quality fetch failed: {}", e);
        })?;
    Ok(Json(payload))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/air-quality", get(get_air_quality))
}
