use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{LeaderboardItem, RecommendationItem},
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use ecotracker_core::recommendations::RecommendationCategory;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RecommendationsQuery {
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/recommendations",
    params(("category" = Option<String>, Query, description = "transport, energy, diet or offsetting")),
    responses(
        (status = 200, body = [RecommendationItem]),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RecommendationsQuery>,
) -> ApiResult<Json<Vec<RecommendationItem>>> {
    let recommendations = match q.category.as_deref() {
        Some(raw) => {
            let category: RecommendationCategory =
                raw.parse().map_err(ecotracker_core::Error::from)?;
            state
                .recommendation_service
                .get_recommendations_for(category)
        }
        None => state.recommendation_service.get_recommendations(),
    };
    Ok(Json(
        recommendations
            .into_iter()
            .map(RecommendationItem::from)
            .collect(),
    ))
}

#[utoipa::path(get, path = "/api/v1/leaderboard", responses((status = 200, body = [LeaderboardItem])))]
pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardItem>> {
    Json(
        state
            .leaderboard_service
            .get_entries()
            .into_iter()
            .map(LeaderboardItem::from)
            .collect(),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", get(get_recommendations))
        .route("/leaderboard", get(get_leaderboard))
}
