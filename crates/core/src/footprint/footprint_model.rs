//! Footprint domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_ACTIVITY_AMOUNT;
use crate::errors::{Result, ValidationError};

// =============================================================================
// Transport
// =============================================================================

/// How the daily commute is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    CarPetrol,
    CarElectric,
    PublicTransport,
    Bicycle,
    Walking,
}

impl TransportMode {
    pub const FIELD: &'static str = "transport.mode";

    pub const ALL: [TransportMode; 5] = [
        TransportMode::CarPetrol,
        TransportMode::CarElectric,
        TransportMode::PublicTransport,
        TransportMode::Bicycle,
        TransportMode::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::CarPetrol => "car_petrol",
            TransportMode::CarElectric => "car_electric",
            TransportMode::PublicTransport => "public_transport",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walking => "walking",
        }
    }

    /// Human readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::CarPetrol => "Car (Petrol)",
            TransportMode::CarElectric => "Car (Electric)",
            TransportMode::PublicTransport => "Public Transport",
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Walking => "Walking",
        }
    }
}

impl FromStr for TransportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| unknown_option(Self::FIELD, s))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Heating
// =============================================================================

/// Fuel used to heat the home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    #[default]
    NaturalGas,
    Electric,
    Oil,
    Renewable,
}

impl HeatingType {
    pub const FIELD: &'static str = "energy.heatingType";

    pub const ALL: [HeatingType; 4] = [
        HeatingType::NaturalGas,
        HeatingType::Electric,
        HeatingType::Oil,
        HeatingType::Renewable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeatingType::NaturalGas => "natural_gas",
            HeatingType::Electric => "electric",
            HeatingType::Oil => "oil",
            HeatingType::Renewable => "renewable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeatingType::NaturalGas => "Natural Gas",
            HeatingType::Electric => "Electric",
            HeatingType::Oil => "Oil",
            HeatingType::Renewable => "Renewable",
        }
    }
}

impl FromStr for HeatingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HeatingType::ALL
            .into_iter()
            .find(|heating| heating.as_str() == s.trim())
            .ok_or_else(|| unknown_option(Self::FIELD, s))
    }
}

impl fmt::Display for HeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Diet
// =============================================================================

/// Dietary pattern, each with a fixed annual baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    MeatDaily,
    MeatWeekly,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const FIELD: &'static str = "diet.dietType";

    pub const ALL: [DietType; 4] = [
        DietType::MeatDaily,
        DietType::MeatWeekly,
        DietType::Vegetarian,
        DietType::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::MeatDaily => "meat_daily",
            DietType::MeatWeekly => "meat_weekly",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietType::MeatDaily => "Meat Daily",
            DietType::MeatWeekly => "Meat Weekly",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
        }
    }
}

impl FromStr for DietType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DietType::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s.trim())
            .ok_or_else(|| unknown_option(Self::FIELD, s))
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn unknown_option(field: &str, value: &str) -> ValidationError {
    ValidationError::invalid(field, format!("unknown option '{}'", value))
}

// =============================================================================
// Activity input
// =============================================================================

/// Daily commute.
///
/// `distance_km` is one distance figure per day; whether that covers the
/// outbound trip only or the round trip is left to whoever fills the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransportInput {
    pub distance_km: f64,
    pub mode: TransportMode,
}

/// Monthly household energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnergyInput {
    pub electricity_kwh: f64,
    pub heating_type: HeatingType,
}

/// Diet and weekly food waste.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietInput {
    pub diet_type: DietType,
    pub food_waste_kg: f64,
}

/// Raw lifestyle activity data fed to the calculator.
///
/// The default value is what a fresh form shows: zero amounts, petrol car,
/// gas heating, meat every day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub transport: TransportInput,
    pub energy: EnergyInput,
    pub diet: DietInput,
}

impl ActivityInput {
    pub const DISTANCE_FIELD: &'static str = "transport.distanceKm";
    pub const ELECTRICITY_FIELD: &'static str = "energy.electricityKwh";
    pub const FOOD_WASTE_FIELD: &'static str = "diet.foodWasteKg";

    /// Rejects negative, non-finite or oversized amounts, naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        check_amount(Self::DISTANCE_FIELD, self.transport.distance_km)?;
        check_amount(Self::ELECTRICITY_FIELD, self.energy.electricity_kwh)?;
        check_amount(Self::FOOD_WASTE_FIELD, self.diet.food_waste_kg)?;
        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, "must be a finite number").into());
    }
    if value < 0.0 {
        return Err(ValidationError::invalid(field, "must not be negative").into());
    }
    if value > MAX_ACTIVITY_AMOUNT {
        return Err(ValidationError::invalid(
            field,
            format!("must not exceed {}", MAX_ACTIVITY_AMOUNT),
        )
        .into());
    }
    Ok(())
}

// =============================================================================
// Results
// =============================================================================

/// Unrounded annual emissions per term, in tonnes CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEmissions {
    pub transport: f64,
    pub electricity: f64,
    pub heating: f64,
    pub diet_baseline: f64,
    pub food_waste: f64,
}

impl CategoryEmissions {
    pub fn energy(&self) -> f64 {
        self.electricity + self.heating
    }

    pub fn diet(&self) -> f64 {
        self.diet_baseline + self.food_waste
    }

    pub fn total(&self) -> f64 {
        self.transport + self.energy() + self.diet()
    }
}

/// Share of the total per category, each rounded to a whole percent on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownPercent {
    pub transport: f64,
    pub energy: f64,
    pub diet: f64,
}

/// Estimated annual footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub total_tonnes_per_year: f64,
    pub breakdown_percent: BreakdownPercent,
}
