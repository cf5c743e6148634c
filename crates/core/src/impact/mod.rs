//! Impact module - letter grade and regional comparison for a footprint.

mod impact_model;

pub use impact_model::{
    ImpactAssessment, ImpactGrade, RegionalComparison, REGIONAL_AVERAGE_TONNES,
    RING_SCALE_TONNES,
};
