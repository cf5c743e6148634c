use log::warn;

use super::activity_form::ActivityForm;
use super::emission_factors::EmissionFactors;
use super::footprint_calculator::{calculate_with_factors, category_emissions};
use super::footprint_model::{ActivityInput, CategoryEmissions, FootprintResult};
use super::footprint_traits::FootprintServiceTrait;
use crate::errors::Result;

/// Stateless calculator bound to one factor table.
pub struct FootprintService {
    factors: EmissionFactors,
}

impl FootprintService {
    pub fn new() -> Self {
        FootprintService {
            factors: EmissionFactors::DEFAULT,
        }
    }

    /// Uses a custom factor table, rejecting negative or non-finite factors.
    pub fn with_factors(factors: EmissionFactors) -> Result<Self> {
        factors.validate()?;
        Ok(FootprintService { factors })
    }
}

impl Default for FootprintService {
    fn default() -> Self {
        Self::new()
    }
}

impl FootprintServiceTrait for FootprintService {
    fn emission_factors(&self) -> &EmissionFactors {
        &self.factors
    }

    fn calculate(&self, input: &ActivityInput) -> Result<FootprintResult> {
        calculate_with_factors(input, &self.factors).inspect_err(|e| {
            warn!("Rejected activity input: {}", e);
        })
    }

    fn calculate_form(&self, form: &ActivityForm) -> Result<FootprintResult> {
        let input = form.parse().inspect_err(|e| {
            warn!("Rejected activity form: {}", e);
        })?;
        self.calculate(&input)
    }

    fn category_emissions(&self, input: &ActivityInput) -> Result<CategoryEmissions> {
        input.validate()?;
        Ok(category_emissions(input, &self.factors))
    }
}
