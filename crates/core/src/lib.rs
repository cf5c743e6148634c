//! EcoTracker Core - carbon footprint estimation.
//!
//! This crate holds the domain logic: activity inputs, emission factor tables,
//! the footprint calculator, and the static catalogues shown next to a result.
//! It performs no I/O.

pub mod constants;
pub mod errors;
pub mod footprint;
pub mod impact;
pub mod leaderboard;
pub mod recommendations;
pub mod utils;

pub use footprint::{calculate, ActivityInput, FootprintResult};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
