//! Air quality request models.

mod pollutants;

pub use pollutants::PollutantReadings;
