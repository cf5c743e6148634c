// Transport, kg CO2e per km
pub const CAR_PETROL_KG_PER_KM: f64 = 0.192;
pub const CAR_ELECTRIC_KG_PER_KM: f64 = 0.053;
pub const PUBLIC_TRANSPORT_KG_PER_KM: f64 = 0.041;
pub const BICYCLE_KG_PER_KM: f64 = 0.0;
pub const WALKING_KG_PER_KM: f64 = 0.0;

/// Grid electricity, kg CO2e per kWh
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.233;

// Heating, kg CO2e per kWh
pub const NATURAL_GAS_KG_PER_KWH: f64 = 0.198;
pub const ELECTRIC_HEATING_KG_PER_KWH: f64 = 0.233;
pub const OIL_KG_PER_KWH: f64 = 0.268;
pub const RENEWABLE_KG_PER_KWH: f64 = 0.025;

// Diet baselines, tonnes CO2e per year
pub const MEAT_DAILY_TONNES_PER_YEAR: f64 = 2.5;
pub const MEAT_WEEKLY_TONNES_PER_YEAR: f64 = 1.7;
pub const VEGETARIAN_TONNES_PER_YEAR: f64 = 1.4;
pub const VEGAN_TONNES_PER_YEAR: f64 = 1.1;

/// Food waste, kg CO2e per kg wasted
pub const FOOD_WASTE_KG_PER_KG: f64 = 2.5;
