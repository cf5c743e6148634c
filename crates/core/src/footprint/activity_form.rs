//! Form-facing helpers: parsing raw form values and per-field updates.

use serde::{Deserialize, Serialize};

use super::footprint_model::{ActivityInput, DietType, HeatingType, TransportMode};
use crate::errors::{Result, ValidationError};

/// A single edited form field with its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityField {
    DistanceKm(f64),
    Mode(TransportMode),
    ElectricityKwh(f64),
    HeatingType(HeatingType),
    DietType(DietType),
    FoodWasteKg(f64),
}

impl ActivityInput {
    /// Returns a copy of this input with one field replaced.
    pub fn with_field(self, field: ActivityField) -> ActivityInput {
        let mut next = self;
        match field {
            ActivityField::DistanceKm(v) => next.transport.distance_km = v,
            ActivityField::Mode(v) => next.transport.mode = v,
            ActivityField::ElectricityKwh(v) => next.energy.electricity_kwh = v,
            ActivityField::HeatingType(v) => next.energy.heating_type = v,
            ActivityField::DietType(v) => next.diet.diet_type = v,
            ActivityField::FoodWasteKg(v) => next.diet.food_waste_kg = v,
        }
        next
    }
}

/// Activity data exactly as collected from an HTML form: every value is text.
///
/// An empty number box counts as zero. Option fields must carry one of the
/// snake_case option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityForm {
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

impl ActivityForm {
    /// Parses every field and validates the resulting input.
    pub fn parse(&self) -> Result<ActivityInput> {
        let defaults = ActivityInput::default();
        let input = defaults
            .with_field(ActivityField::DistanceKm(parse_amount(
                ActivityInput::DISTANCE_FIELD,
                &self.distance_km,
            )?))
            .with_field(ActivityField::Mode(parse_option(
                TransportMode::FIELD,
                &self.mode,
            )?))
            .with_field(ActivityField::ElectricityKwh(parse_amount(
                ActivityInput::ELECTRICITY_FIELD,
                &self.electricity_kwh,
            )?))
            .with_field(ActivityField::HeatingType(parse_option(
                HeatingType::FIELD,
                &self.heating_type,
            )?))
            .with_field(ActivityField::DietType(parse_option(
                DietType::FIELD,
                &self.diet_type,
            )?))
            .with_field(ActivityField::FoodWasteKg(parse_amount(
                ActivityInput::FOOD_WASTE_FIELD,
                &self.food_waste_kg,
            )?));
        input.validate()?;
        Ok(input)
    }
}

impl From<&ActivityInput> for ActivityForm {
    fn from(input: &ActivityInput) -> Self {
        ActivityForm {
            distance_km: input.transport.distance_km.to_string(),
            mode: input.transport.mode.to_string(),
            electricity_kwh: input.energy.electricity_kwh.to_string(),
            heating_type: input.energy.heating_type.to_string(),
            diet_type: input.diet.diet_type.to_string(),
            food_waste_kg: input.diet.food_waste_kg.to_string(),
        }
    }
}

fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::invalid(field, format!("'{}' is not a number", raw)).into())
}

fn parse_option<T>(field: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr<Err = ValidationError>,
{
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    raw.parse::<T>().map_err(Into::into)
}
