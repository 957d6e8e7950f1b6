use model::airport::{Airport, AirportLocation};
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AirportRow {
    pub icao_code: String,
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub has_charging_station: bool,
}

impl AirportRow {
    pub fn to_model(self) -> Airport {
        Airport {
            icao_code: self.icao_code,
            name: self.name,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            has_charging_station: self.has_charging_station,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AirportLocationRow {
    pub icao_code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub has_charging_station: bool,
}

impl AirportLocationRow {
    pub fn to_model(self) -> AirportLocation {
        AirportLocation {
            icao_code: self.icao_code,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            has_charging_station: self.has_charging_station,
        }
    }
}
