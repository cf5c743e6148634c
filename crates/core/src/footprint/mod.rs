//! Footprint module - activity inputs, emission factors, and the calculator.

mod activity_form;
mod emission_factors;
mod footprint_calculator;
mod footprint_constants;
mod footprint_model;
mod footprint_service;
mod footprint_traits;

pub use activity_form::{ActivityField, ActivityForm};
pub use emission_factors::{DietBaselines, EmissionFactors, HeatingFactors, TransportFactors};
pub use footprint_calculator::{calculate, calculate_with_factors, category_emissions, summarize};
pub use footprint_model::{
    ActivityInput, BreakdownPercent, CategoryEmissions, DietInput, DietType, EnergyInput,
    FootprintResult, HeatingType, TransportInput, TransportMode,
};
pub use footprint_service::FootprintService;
pub use footprint_traits::FootprintServiceTrait;


#[cfg(test)]
mod footprint_model_tests;
