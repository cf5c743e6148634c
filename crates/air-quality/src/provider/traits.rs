//! Air quality provider trait definitions.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AirQualityError;
use crate::models::PollutantReadings;

/// Trait for air quality providers.
///
/// Implement this trait to relay a different upstream service, or to stub
/// the upstream in tests.
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the health index for the given readings.
    ///
    /// Returns the provider's JSON body untouched on success.
    async fn fetch_health_index(
        &self,
        readings: &PollutantReadings,
    ) -> Result<Value, AirQualityError>;
}
