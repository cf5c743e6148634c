//! Recommendation domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::High => "High Impact",
            ImpactLevel::Medium => "Medium Impact",
            ImpactLevel::Low => "Low Impact",
        }
    }
}

/// Which part of the footprint a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationCategory {
    Transport,
    Energy,
    Diet,
    Offsetting,
}

impl RecommendationCategory {
    pub const FIELD: &'static str = "category";

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Transport => "transport",
            RecommendationCategory::Energy => "energy",
            RecommendationCategory::Diet => "diet",
            RecommendationCategory::Offsetting => "offsetting",
        }
    }
}

impl FromStr for RecommendationCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "transport" => Ok(RecommendationCategory::Transport),
            "energy" => Ok(RecommendationCategory::Energy),
            "diet" => Ok(RecommendationCategory::Diet),
            "offsetting" => Ok(RecommendationCategory::Offsetting),
            _ => Err(ValidationError::invalid(
                Self::FIELD,
                format!("unknown category '{}'", s),
            )),
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub category: RecommendationCategory,
}
