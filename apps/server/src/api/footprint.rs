use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ActivityFormRequest, ActivityRequest, FootprintReport},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use ecotracker_core::footprint::{ActivityForm, ActivityInput, EmissionFactors};

fn reject(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/api/v1/footprint/calculate",
    request_body = ActivityRequest,
    responses(
        (status = 200, body = FootprintReport),
        (status = 400, description = "Invalid activity input")
    )
)]
pub async fn calculate_footprint(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ActivityRequest>, JsonRejection>,
) -> ApiResult<Json<FootprintReport>> {
    let Json(request) = payload.map_err(reject)?;
    let input = ActivityInput::try_from(request)?;
    let result = state.footprint_service.calculate(&input)?;
    Ok(Json(FootprintReport::from(result)))
}

#[utoipa::path(
    post,
    path = "/api/v1/footprint/form",
    request_body = ActivityFormRequest,
    responses(
        (status = 200, body = FootprintReport),
        (status = 400, description = "Invalid form value")
    )
)]
pub async fn calculate_footprint_form(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ActivityFormRequest>, JsonRejection>,
) -> ApiResult<Json<FootprintReport>> {
    let Json(form) = payload.map_err(reject)?;
    let result = state
        .footprint_service
        .calculate_form(&ActivityForm::from(form))?;
    Ok(Json(FootprintReport::from(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/footprint/factors",
    responses((status = 200, description = "Active emission factor table"))
)]
pub async fn get_emission_factors(State(state): State<Arc<AppState>>) -> Json<EmissionFactors> {
    Json(*state.footprint_service.emission_factors())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/footprint/calculate", post(calculate_footprint))
        .route("/footprint/form", post(calculate_footprint_form))
        .route("/footprint/factors", get(get_emission_factors))
}
