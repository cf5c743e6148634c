//! Integration tests for the RapidAPI provider against a local stand-in host.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use ecotracker_air_quality::{
    AirQualityError, AirQualityProvider, PollutantReadings, RapidApiAirQualityProvider,
};
use serde_json::{json, Value};

#[derive(Debug, Default, Clone)]
struct SeenRequest {
    query: HashMap<String, String>,
    api_key: Option<String>,
    host: Option<String>,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn health_index(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    upstream.seen.lock().unwrap().push(SeenRequest {
        query,
        api_key: header("x-rapidapi-key"),
        host: header("x-rapidapi-host"),
    });
    (upstream.status, Json(upstream.body.clone()))
}

async fn spawn_upstream(status: StatusCode, body: Value) -> (SocketAddr, Upstream) {
    let upstream = Upstream {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/AirQualityHealthIndex", get(health_index))
        .with_state(upstream.clone());
    (serve(app).await, upstream)
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn provider_with_timeout(addr: SocketAddr, timeout: Duration) -> RapidApiAirQualityProvider {
    RapidApiAirQualityProvider::with_options(
        Some("secret".to_string()),
        &format!("http://{}", addr),
        timeout,
    )
}

fn provider_for(addr: SocketAddr, api_key: Option<&str>) -> RapidApiAirQualityProvider {
    RapidApiAirQualityProvider::with_options(
        api_key.map(str::to_string),
        &format!("http://{}", addr),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn test_success_returns_body_verbatim() {
    let body = json!({
        "airQualityHealthIndex": 3,
        "nested": {"note": "kept as is", "values": [1, 2.5, null]}
    });
    let (addr, _upstream) = spawn_upstream(StatusCode::OK, body.clone()).await;

    let result = provider_for(addr, Some("secret"))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_request_carries_fixed_readings_and_headers() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, json!({})).await;

    provider_for(addr, Some("secret"))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap();

    let seen = upstream.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.query.get("O3").map(String::as_str), Some("10"));
    assert_eq!(request.query.get("NO2").map(String::as_str), Some("10"));
    assert_eq!(request.query.get("PM").map(String::as_str), Some("10"));
    assert_eq!(request.api_key.as_deref(), Some("secret"));
    assert_eq!(
        request.host.as_deref(),
        Some("carbonfootprint1.p.rapidapi.com")
    );
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (addr, _upstream) = spawn_upstream(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"message": "try later"}),
    )
    .await;

    let err = provider_for(addr, Some("secret"))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap_err();

    assert_eq!(err.upstream_status(), Some(503));
    match err {
        AirQualityError::UpstreamStatus { body, .. } => assert!(body.contains("try later")),
        other => panic!("expected upstream status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_key_never_reaches_upstream() {
    let (addr, upstream) = spawn_upstream(StatusCode::OK, json!({})).await;

    let err = provider_for(addr, None)
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap_err();

    assert!(matches!(err, AirQualityError::MissingApiKey { .. }));
    assert!(upstream.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    // Bind then drop so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider_for(addr, Some("secret"))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap_err();

    assert!(
        matches!(err, AirQualityError::Network(_)),
        "expected network error, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_slow_upstream_is_a_timeout() {
    let app = Router::new().route(
        "/AirQualityHealthIndex",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"late": true}))
        }),
    );
    let addr = serve(app).await;

    let err = provider_with_timeout(addr, Duration::from_millis(100))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap_err();

    assert!(
        matches!(err, AirQualityError::Timeout { .. }),
        "expected timeout, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_non_json_success_is_an_invalid_response() {
    let app = Router::new().route(
        "/AirQualityHealthIndex",
        get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "not json") }),
    );
    let addr = serve(app).await;

    let err = provider_for(addr, Some("secret"))
        .fetch_health_index(&PollutantReadings::FIXED)
        .await
        .unwrap_err();

    assert!(
        matches!(err, AirQualityError::InvalidResponse { .. }),
        "expected invalid response, got {:?}",
        err
    );
    assert_eq!(err.upstream_status(), None);
}
