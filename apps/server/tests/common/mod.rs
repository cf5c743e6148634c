#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use ecotracker_air_quality::{AirQualityError, AirQualityProvider, PollutantReadings};
use ecotracker_server::{api::app_router, build_state_with_provider, config::Config};
use serde_json::Value;
use tower::ServiceExt;

/// Provider double that answers every call the same way.
pub struct FakeProvider {
    payload: Option<Value>,
    pub calls: AtomicUsize,
}

impl FakeProvider {
    pub fn ok(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            payload: Some(payload),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            payload: None,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AirQualityProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn fetch_health_index(
        &self,
        readings: &PollutantReadings,
    ) -> Result<Value, AirQualityError> {
        assert_eq!(*readings, PollutantReadings::FIXED);
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(AirQualityError::UpstreamStatus {
                provider: "FAKE".to_string(),
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

pub fn build_router_with(provider: Arc<dyn AirQualityProvider>) -> Router {
    let config = Config::default();
    let state = build_state_with_provider(provider).unwrap();
    app_router(state, &config)
}

pub fn build_router() -> Router {
    build_router_with(FakeProvider::ok(serde_json::json!({})))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
