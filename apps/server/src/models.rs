use ecotracker_core::{
    footprint::{
        ActivityForm, ActivityInput, DietInput, EnergyInput, FootprintResult, TransportInput,
    },
    impact::ImpactAssessment,
    leaderboard::LeaderboardEntry,
    recommendations::Recommendation,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Option fields arrive as plain strings so an unknown value is reported with
// its field name instead of as a generic JSON error.

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub distance_km: f64,
    /// One of `car_petrol`, `car_electric`, `public_transport`, `bicycle`, `walking`.
    pub mode: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRequest {
    pub electricity_kwh: f64,
    /// One of `natural_gas`, `electric`, `oil`, `renewable`.
    pub heating_type: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DietRequest {
    /// One of `meat_daily`, `meat_weekly`, `vegetarian`, `vegan`.
    pub diet_type: String,
    pub food_waste_kg: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub transport: TransportRequest,
    pub energy: EnergyRequest,
    pub diet: DietRequest,
}

impl TryFrom<ActivityRequest> for ActivityInput {
    type Error = ecotracker_core::Error;

    fn try_from(r: ActivityRequest) -> Result<Self, Self::Error> {
        Ok(ActivityInput {
            transport: TransportInput {
                distance_km: r.transport.distance_km,
                mode: r.transport.mode.parse()?,
            },
            energy: EnergyInput {
                electricity_kwh: r.energy.electricity_kwh,
                heating_type: r.energy.heating_type.parse()?,
            },
            diet: DietInput {
                diet_type: r.diet.diet_type.parse()?,
                food_waste_kg: r.diet.food_waste_kg,
            },
        })
    }
}

/// Raw form values; empty number fields count as zero.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFormRequest {
    #[serde(default)]
    pub distance_km: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub electricity_kwh: String,
    #[serde(default)]
    pub heating_type: String,
    #[serde(default)]
    pub diet_type: String,
    #[serde(default)]
    pub food_waste_kg: String,
}

impl From<ActivityFormRequest> for ActivityForm {
    fn from(f: ActivityFormRequest) -> Self {
        ActivityForm {
            distance_km: f.distance_km,
            mode: f.mode,
            electricity_kwh: f.electricity_kwh,
            heating_type: f.heating_type,
            diet_type: f.diet_type,
            food_waste_kg: f.food_waste_kg,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub transport: f64,
    pub energy: f64,
    pub diet: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    /// `A` to `D`.
    pub grade: String,
    /// `BELOW` or `ABOVE`.
    pub regional_comparison: String,
    pub regional_message: String,
    pub ring_progress: f64,
}

impl From<ImpactAssessment> for Impact {
    fn from(a: ImpactAssessment) -> Self {
        let regional_comparison = match a.regional_comparison {
            ecotracker_core::impact::RegionalComparison::Below => "BELOW",
            ecotracker_core::impact::RegionalComparison::Above => "ABOVE",
        }
        .to_string();
        Self {
            grade: a.grade.to_string(),
            regional_comparison,
            regional_message: a.regional_comparison.message().to_string(),
            ring_progress: a.ring_progress,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    pub total_tonnes_per_year: f64,
    pub breakdown_percent: Breakdown,
    pub impact: Impact,
}

impl From<FootprintResult> for FootprintReport {
    fn from(r: FootprintResult) -> Self {
        Self {
            total_tonnes_per_year: r.total_tonnes_per_year,
            breakdown_percent: Breakdown {
                transport: r.breakdown_percent.transport,
                energy: r.breakdown_percent.energy,
                diet: r.breakdown_percent.diet,
            },
            impact: ImpactAssessment::from(&r).into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label, e.g. `High Impact`.
    pub impact: String,
    pub category: String,
}

impl From<Recommendation> for RecommendationItem {
    fn from(r: Recommendation) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            impact: r.impact.label().to_string(),
            category: r.category.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub rank: u32,
    pub name: String,
    pub footprint_tonnes: f64,
    pub status: String,
}

impl From<LeaderboardEntry> for LeaderboardItem {
    fn from(e: LeaderboardEntry) -> Self {
        Self {
            rank: e.rank,
            name: e.name,
            footprint_tonnes: e.footprint_tonnes,
            status: e.status.label().to_string(),
        }
    }
}
