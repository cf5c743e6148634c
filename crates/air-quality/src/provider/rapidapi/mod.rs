//! RapidAPI carbon-footprint host, `AirQualityHealthIndex` endpoint.
//!
//! Requests carry the key in the `x-rapidapi-key` header and name the host in
//! `x-rapidapi-host`. The readings travel as query parameters.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::AirQualityError;
use crate::models::PollutantReadings;
use crate::provider::AirQualityProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "RAPIDAPI_CARBONFOOTPRINT";

/// Host registered on RapidAPI
pub const RAPIDAPI_HOST: &str = "carbonfootprint1.p.rapidapi.com";

/// Default base URL
pub const DEFAULT_BASE_URL: &str = "https://carbonfootprint1.p.rapidapi.com";

const HEALTH_INDEX_PATH: &str = "/AirQualityHealthIndex";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the RapidAPI air quality health index.
///
/// # Example
///
/// ```ignore
/// use ecotracker_air_quality::RapidApiAirQualityProvider;
///
/// let provider = RapidApiAirQualityProvider::new(Some("your_api_key".to_string()));
/// ```
pub struct RapidApiAirQualityProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl RapidApiAirQualityProvider {
    /// Create a provider against the public host with the default timeout.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider against `base_url`, giving up after `timeout`.
    pub fn with_options(api_key: Option<String>, base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the health index endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_INDEX_PATH)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl AirQualityProvider for RapidApiAirQualityProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_health_index(
        &self,
        readings: &PollutantReadings,
    ) -> Result<Value, AirQualityError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AirQualityError::MissingApiKey {
                provider: PROVIDER_ID.to_string(),
            })?;

        let url = self.endpoint();
        debug!("Air quality request: {} with {:?}", url, readings);

        let response = self
            .client
            .get(&url)
            .query(&readings.query_params())
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AirQualityError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    AirQualityError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AirQualityError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AirQualityError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }
}
