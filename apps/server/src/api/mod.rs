use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        ActivityFormRequest, ActivityRequest, Breakdown, DietRequest, EnergyRequest,
        FootprintReport, Impact, LeaderboardItem, RecommendationItem, TransportRequest,
    },
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod air_quality;
mod catalog;
mod footprint;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        footprint::calculate_footprint,
        footprint::calculate_footprint_form,
        footprint::get_emission_factors,
        catalog::get_recommendations,
        catalog::get_leaderboard,
        air_quality::get_air_quality,
    ),
    components(schemas(
        ActivityRequest,
        TransportRequest,
        EnergyRequest,
        DietRequest,
        ActivityFormRequest,
        FootprintReport,
        Breakdown,
        Impact,
        RecommendationItem,
        LeaderboardItem,
    )),
    tags((name = "ecotracker"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(footprint::router())
        .merge(catalog::router());

    Router::new()
        .nest("/api/v1", api)
        .merge(air_quality::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
