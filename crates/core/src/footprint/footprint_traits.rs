use crate::errors::Result;
use crate::footprint::activity_form::ActivityForm;
use crate::footprint::emission_factors::EmissionFactors;
use crate::footprint::footprint_model::{ActivityInput, CategoryEmissions, FootprintResult};

/// Trait for footprint estimation
pub trait FootprintServiceTrait: Send + Sync {
    fn emission_factors(&self) -> &EmissionFactors;
    fn calculate(&self, input: &ActivityInput) -> Result<FootprintResult>;
    fn calculate_form(&self, form: &ActivityForm) -> Result<FootprintResult>;
    fn category_emissions(&self, input: &ActivityInput) -> Result<CategoryEmissions>;
}
