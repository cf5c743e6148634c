use log::debug;

use super::emission_factors::EmissionFactors;
use super::footprint_model::{ActivityInput, BreakdownPercent, CategoryEmissions, FootprintResult};
use crate::constants::{
    DAYS_PER_YEAR, KG_PER_TONNE, MONTHS_PER_YEAR, PERCENT_DECIMAL_PRECISION,
    TOTAL_DECIMAL_PRECISION, WEEKS_PER_YEAR,
};
use crate::errors::Result;
use crate::utils::rounding::round_half_away;

/// Estimates the annual footprint of `input` using the published factors.
pub fn calculate(input: &ActivityInput) -> Result<FootprintResult> {
    calculate_with_factors(input, &EmissionFactors::DEFAULT)
}

/// Estimates the annual footprint of `input` using the given factor table.
///
/// The input is validated before any arithmetic. The total is rounded to two
/// decimals; each breakdown share is computed from the unrounded figures and
/// rounded to a whole percent on its own, so the shares may not add up to
/// exactly 100.
pub fn calculate_with_factors(
    input: &ActivityInput,
    factors: &EmissionFactors,
) -> Result<FootprintResult> {
    input.validate()?;
    let emissions = category_emissions(input, factors);
    let result = summarize(&emissions)?;
    debug!(
        "Footprint for {} / {} / {}: {} t CO2e",
        input.transport.mode, input.energy.heating_type, input.diet.diet_type,
        result.total_tonnes_per_year
    );
    Ok(result)
}

/// Annual tonnes per term, unrounded. Does not validate `input`.
pub fn category_emissions(input: &ActivityInput, factors: &EmissionFactors) -> CategoryEmissions {
    let transport = input.transport.distance_km
        * factors.transport_kg_per_km.factor(input.transport.mode)
        * DAYS_PER_YEAR
        / KG_PER_TONNE;

    // Heating reuses the electricity reading; there is no separate fuel figure.
    let kwh = input.energy.electricity_kwh;
    let electricity = kwh * factors.electricity_kg_per_kwh * MONTHS_PER_YEAR / KG_PER_TONNE;
    let heating = kwh * factors.heating_kg_per_kwh.factor(input.energy.heating_type)
        * MONTHS_PER_YEAR
        / KG_PER_TONNE;

    let diet_baseline = factors.diet_tonnes_per_year.baseline(input.diet.diet_type);
    let food_waste =
        input.diet.food_waste_kg * factors.food_waste_kg_per_kg * WEEKS_PER_YEAR / KG_PER_TONNE;

    CategoryEmissions {
        transport,
        electricity,
        heating,
        diet_baseline,
        food_waste,
    }
}

/// Rounds the total and derives the percentage breakdown.
///
/// A zero total yields a zero breakdown instead of NaN.
pub fn summarize(emissions: &CategoryEmissions) -> Result<FootprintResult> {
    let total = emissions.total();

    let breakdown_percent = if total > 0.0 {
        BreakdownPercent {
            transport: share_of(emissions.transport, total)?,
            energy: share_of(emissions.energy(), total)?,
            diet: share_of(emissions.diet(), total)?,
        }
    } else {
        BreakdownPercent::default()
    };

    Ok(FootprintResult {
        total_tonnes_per_year: round_half_away(total, TOTAL_DECIMAL_PRECISION)?,
        breakdown_percent,
    })
}

fn share_of(part: f64, total: f64) -> Result<f64> {
    round_half_away(part / total * 100.0, PERCENT_DECIMAL_PRECISION)
}
