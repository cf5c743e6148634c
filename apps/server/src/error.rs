use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ecotracker_air_quality::AirQualityError;
use ecotracker_core::errors::Error as CoreError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Body of every failed air quality relay, whatever went wrong upstream.
pub const AIR_QUALITY_FAILURE: &str = "Failed to fetch air quality data";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    AirQuality(#[from] AirQualityError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::AirQuality(_) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": AIR_QUALITY_FAILURE })),
                )
                    .into_response();
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
