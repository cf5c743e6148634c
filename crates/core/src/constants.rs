/// Days used to annualize a daily commute figure
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months used to annualize a monthly meter reading
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Weeks used to annualize a weekly food-waste figure
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Kilograms per tonne
pub const KG_PER_TONNE: f64 = 1000.0;

/// Largest accepted value for any activity amount (km, kWh or kg)
pub const MAX_ACTIVITY_AMOUNT: f64 = 1e12;

/// Decimal precision for the annual total
pub const TOTAL_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for breakdown percentages
pub const PERCENT_DECIMAL_PRECISION: u32 = 0;
