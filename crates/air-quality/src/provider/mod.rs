//! Air quality provider abstractions and implementations.

mod traits;

pub mod rapidapi;

pub use traits::AirQualityProvider;
