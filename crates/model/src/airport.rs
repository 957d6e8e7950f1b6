use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// A row of the `airport` table as listed by `/airports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub icao_code: String,
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub has_charging_station: bool,
}

/// The part of an airport that is reported as a player's current location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportLocation {
    pub icao_code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub has_charging_station: bool,
}

impl From<Airport> for AirportLocation {
    fn from(airport: Airport) -> Self {
        Self {
            icao_code: airport.icao_code,
            name: airport.name,
            latitude: airport.latitude,
            longitude: airport.longitude,
            has_charging_station: airport.has_charging_station,
        }
    }
}

impl ExampleData for Airport {
    fn example_data() -> Self {
        Self {
            icao_code: "EFHK".to_owned(),
            name: "Helsinki Vantaa Airport".to_owned(),
            country: Some("Finland".to_owned()),
            latitude: 60.3172,
            longitude: 24.963301,
            has_charging_station: true,
        }
    }
}

impl ExampleData for AirportLocation {
    fn example_data() -> Self {
        Airport::example_data().into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn airport_keeps_null_country() {
        let airport = Airport {
            country: None,
            ..Airport::example_data()
        };
        let value = serde_json::to_value(airport).unwrap();
        assert_eq!(value["country"], serde_json::Value::Null);
        assert_eq!(value["has_charging_station"], json!(true));
    }

    #[test]
    fn location_has_no_country() {
        let value = serde_json::to_value(AirportLocation::example_data()).unwrap();
        assert_eq!(
            value,
            json!({
                "icao_code": "EFHK",
                "name": "Helsinki Vantaa Airport",
                "latitude": 60.3172,
                "longitude": 24.963301,
                "has_charging_station": true,
            })
        );
    }
}
