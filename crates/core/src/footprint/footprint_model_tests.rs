//! Tests for footprint domain models.

#[cfg(test)]
mod tests {
    use crate::footprint::{
        ActivityInput, DietType, FootprintResult, HeatingType, TransportMode,
    };
    use std::str::FromStr;

    // ==================== Option values ====================

    #[test]
    fn test_option_values_round_trip_through_from_str() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_str(mode.as_str()).unwrap(), mode);
        }
        for heating in HeatingType::ALL {
            assert_eq!(HeatingType::from_str(heating.as_str()).unwrap(), heating);
        }
        for diet in DietType::ALL {
            assert_eq!(DietType::from_str(diet.as_str()).unwrap(), diet);
        }
    }

    #[test]
    fn test_unknown_options_name_their_field() {
        assert_eq!(TransportMode::from_str("hovercraft").unwrap_err().field(), "transport.mode");
        assert_eq!(HeatingType::from_str("coal").unwrap_err().field(), "energy.heatingType");
        assert_eq!(DietType::from_str("keto").unwrap_err().field(), "diet.dietType");
    }

    #[test]
    fn test_options_are_case_sensitive() {
        assert!(TransportMode::from_str("CAR_PETROL").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TransportMode::CarPetrol.label(), "Car (Petrol)");
        assert_eq!(TransportMode::PublicTransport.label(), "Public Transport");
        assert_eq!(HeatingType::NaturalGas.label(), "Natural Gas");
        assert_eq!(DietType::MeatWeekly.label(), "Meat Weekly");
    }

    // ==================== Serialization ====================

    #[test]
    fn test_activity_input_deserialization() {
        let json = r#"{
            "transport": {"distanceKm": 20, "mode": "car_petrol"},
            "energy": {"electricityKwh": 300, "heatingType": "natural_gas"},
            "diet": {"dietType": "meat_daily", "foodWasteKg": 2}
        }"#;
        let input: ActivityInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transport.distance_km, 20.0);
        assert_eq!(input.transport.mode, TransportMode::CarPetrol);
        assert_eq!(input.energy.heating_type, HeatingType::NaturalGas);
        assert_eq!(input.diet.diet_type, DietType::MeatDaily);
        assert_eq!(input.diet.food_waste_kg, 2.0);
    }

    #[test]
    fn test_unknown_enum_fails_deserialization() {
        let json = r#"{
            "transport": {"distanceKm": 20, "mode": "teleport"},
            "energy": {"electricityKwh": 300, "heatingType": "natural_gas"},
            "diet": {"dietType": "meat_daily", "foodWasteKg": 2}
        }"#;
        assert!(serde_json::from_str::<ActivityInput>(json).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = FootprintResult {
            total_tonnes_per_year: 5.71,
            breakdown_percent: crate::footprint::BreakdownPercent {
                transport: 25.0,
                energy: 27.0,
                diet: 48.0,
            },
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["totalTonnesPerYear"], 5.71);
        assert_eq!(json["breakdownPercent"]["transport"], 25.0);
        assert_eq!(json["breakdownPercent"]["diet"], 48.0);
    }

    #[test]
    fn test_default_input_matches_fresh_form() {
        let input = ActivityInput::default();
        assert_eq!(input.transport.mode, TransportMode::CarPetrol);
        assert_eq!(input.energy.heating_type, HeatingType::NaturalGas);
        assert_eq!(input.diet.diet_type, DietType::MeatDaily);
        assert_eq!(input.transport.distance_km, 0.0);
    }
}
