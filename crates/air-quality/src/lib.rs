//! EcoTracker Air Quality Crate
//!
//! Fetches an air-quality health index from a third-party provider so the
//! server can relay it. The crate does not interpret the provider's payload:
//! a successful response body is handed back as raw JSON.
//!
//! # Core Types
//!
//! - [`AirQualityProvider`] - Trait implemented by every upstream source
//! - [`RapidApiAirQualityProvider`] - The RapidAPI carbon-footprint host
//! - [`PollutantReadings`] - Pollutant concentrations sent with a request
//! - [`AirQualityError`] - Failures while talking to a provider

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::AirQualityError;
pub use models::PollutantReadings;
pub use provider::rapidapi::RapidApiAirQualityProvider;
pub use provider::AirQualityProvider;
