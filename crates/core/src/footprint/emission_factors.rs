//! Emission factor tables.
//!
//! Each table has one field per enum variant so that a lookup is an
//! exhaustive `match`: adding a mode, heating type or diet without a factor
//! does not compile.

use serde::{Deserialize, Serialize};

use super::footprint_constants::*;
use super::footprint_model::{DietType, HeatingType, TransportMode};
use crate::errors::{CalculatorError, Result};

/// kg CO2e per km travelled, per transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportFactors {
    pub car_petrol: f64,
    pub car_electric: f64,
    pub public_transport: f64,
    pub bicycle: f64,
    pub walking: f64,
}

impl TransportFactors {
    pub fn factor(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::CarPetrol => self.car_petrol,
            TransportMode::CarElectric => self.car_electric,
            TransportMode::PublicTransport => self.public_transport,
            TransportMode::Bicycle => self.bicycle,
            TransportMode::Walking => self.walking,
        }
    }
}

/// kg CO2e per kWh, per heating fuel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatingFactors {
    pub natural_gas: f64,
    pub electric: f64,
    pub oil: f64,
    pub renewable: f64,
}

impl HeatingFactors {
    pub fn factor(&self, heating_type: HeatingType) -> f64 {
        match heating_type {
            HeatingType::NaturalGas => self.natural_gas,
            HeatingType::Electric => self.electric,
            HeatingType::Oil => self.oil,
            HeatingType::Renewable => self.renewable,
        }
    }
}

/// Annual baseline in tonnes CO2e, per diet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietBaselines {
    pub meat_daily: f64,
    pub meat_weekly: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl DietBaselines {
    pub fn baseline(&self, diet_type: DietType) -> f64 {
        match diet_type {
            DietType::MeatDaily => self.meat_daily,
            DietType::MeatWeekly => self.meat_weekly,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }
}

/// The full factor configuration used by the calculator.
///
/// Loaded once and shared read-only; nothing mutates it after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    pub transport_kg_per_km: TransportFactors,
    pub electricity_kg_per_kwh: f64,
    pub heating_kg_per_kwh: HeatingFactors,
    pub diet_tonnes_per_year: DietBaselines,
    pub food_waste_kg_per_kg: f64,
}

impl EmissionFactors {
    /// Published factors (EPA / IPCC derived).
    pub const DEFAULT: EmissionFactors = EmissionFactors {
        transport_kg_per_km: TransportFactors {
            car_petrol: CAR_PETROL_KG_PER_KM,
            car_electric: CAR_ELECTRIC_KG_PER_KM,
            public_transport: PUBLIC_TRANSPORT_KG_PER_KM,
            bicycle: BICYCLE_KG_PER_KM,
            walking: WALKING_KG_PER_KM,
        },
        electricity_kg_per_kwh: ELECTRICITY_KG_PER_KWH,
        heating_kg_per_kwh: HeatingFactors {
            natural_gas: NATURAL_GAS_KG_PER_KWH,
            electric: ELECTRIC_HEATING_KG_PER_KWH,
            oil: OIL_KG_PER_KWH,
            renewable: RENEWABLE_KG_PER_KWH,
        },
        diet_tonnes_per_year: DietBaselines {
            meat_daily: MEAT_DAILY_TONNES_PER_YEAR,
            meat_weekly: MEAT_WEEKLY_TONNES_PER_YEAR,
            vegetarian: VEGETARIAN_TONNES_PER_YEAR,
            vegan: VEGAN_TONNES_PER_YEAR,
        },
        food_waste_kg_per_kg: FOOD_WASTE_KG_PER_KG,
    };

    /// Checks that every factor is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let t = &self.transport_kg_per_km;
        let h = &self.heating_kg_per_kwh;
        let d = &self.diet_tonnes_per_year;
        let entries = [
            ("transportKgPerKm.carPetrol", t.car_petrol),
            ("transportKgPerKm.carElectric", t.car_electric),
            ("transportKgPerKm.publicTransport", t.public_transport),
            ("transportKgPerKm.bicycle", t.bicycle),
            ("transportKgPerKm.walking", t.walking),
            ("electricityKgPerKwh", self.electricity_kg_per_kwh),
            ("heatingKgPerKwh.naturalGas", h.natural_gas),
            ("heatingKgPerKwh.electric", h.electric),
            ("heatingKgPerKwh.oil", h.oil),
            ("heatingKgPerKwh.renewable", h.renewable),
            ("dietTonnesPerYear.meatDaily", d.meat_daily),
            ("dietTonnesPerYear.meatWeekly", d.meat_weekly),
            ("dietTonnesPerYear.vegetarian", d.vegetarian),
            ("dietTonnesPerYear.vegan", d.vegan),
            ("foodWasteKgPerKg", self.food_waste_kg_per_kg),
        ];

        match entries
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, _)) => Err(CalculatorError::InvalidFactor(name.to_string()).into()),
            None => Ok(()),
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::DEFAULT
    }
}
