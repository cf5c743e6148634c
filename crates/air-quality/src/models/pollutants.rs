use serde::{Deserialize, Serialize};

/// Pollutant concentrations submitted to the health index endpoint.
///
/// Serialized as the provider's `O3`, `NO2` and `PM` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollutantReadings {
    #[serde(rename = "O3")]
    pub o3: u32,
    #[serde(rename = "NO2")]
    pub no2: u32,
    #[serde(rename = "PM")]
    pub pm: u32,
}

impl PollutantReadings {
    /// Readings the relay always sends; callers cannot supply their own.
    pub const FIXED: PollutantReadings = PollutantReadings {
        o3: 10,
        no2: 10,
        pm: 10,
    };

    /// Query parameters in the order the provider documents them.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("O3", self.o3.to_string()),
            ("NO2", self.no2.to_string()),
            ("PM", self.pm.to_string()),
        ]
    }
}

impl Default for PollutantReadings {
    fn default() -> Self {
        Self::FIXED
    }
}
