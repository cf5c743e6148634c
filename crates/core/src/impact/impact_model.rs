//! Impact assessment models.
//!
//! These interpret an already rounded [`FootprintResult`]; they never feed
//! back into the calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::footprint::FootprintResult;

/// Annual tonnes above which a footprint is above the regional average.
pub const REGIONAL_AVERAGE_TONNES: f64 = 5.0;

/// Annual tonnes that fully deplete the impact ring.
pub const RING_SCALE_TONNES: f64 = 10.0;

/// Letter grade, A being the lowest footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactGrade {
    A,
    B,
    C,
    D,
}

impl ImpactGrade {
    /// Grades an annual total: below 2 t is A, below 4 t is B, below 6 t is C.
    pub fn from_total(total_tonnes: f64) -> Self {
        if total_tonnes < 2.0 {
            ImpactGrade::A
        } else if total_tonnes < 4.0 {
            ImpactGrade::B
        } else if total_tonnes < 6.0 {
            ImpactGrade::C
        } else {
            ImpactGrade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactGrade::A => "A",
            ImpactGrade::B => "B",
            ImpactGrade::C => "C",
            ImpactGrade::D => "D",
        }
    }
}

impl fmt::Display for ImpactGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionalComparison {
    Below,
    Above,
}

impl RegionalComparison {
    pub fn from_total(total_tonnes: f64) -> Self {
        if total_tonnes < REGIONAL_AVERAGE_TONNES {
            RegionalComparison::Below
        } else {
            RegionalComparison::Above
        }
    }

    /// Sentence shown under the total.
    pub fn message(&self) -> &'static str {
        match self {
            RegionalComparison::Below => "Below average for your region",
            RegionalComparison::Above => "Above average for your region",
        }
    }
}

/// How a footprint result reads to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub grade: ImpactGrade,
    pub regional_comparison: RegionalComparison,
    /// Remaining fraction of the impact ring, in [0, 1].
    pub ring_progress: f64,
}

impl ImpactAssessment {
    pub fn from_total(total_tonnes: f64) -> Self {
        ImpactAssessment {
            grade: ImpactGrade::from_total(total_tonnes),
            regional_comparison: RegionalComparison::from_total(total_tonnes),
            ring_progress: (1.0 - total_tonnes / RING_SCALE_TONNES).clamp(0.0, 1.0),
        }
    }
}

impl From<&FootprintResult> for ImpactAssessment {
    fn from(result: &FootprintResult) -> Self {
        ImpactAssessment::from_total(result.total_tonnes_per_year)
    }
}
