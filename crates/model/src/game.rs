//! Game status records.
//!
//! None of these are persisted. A status is assembled from constants and
//! request input every time it is asked for, and the client carries it
//! from one request to the next.

use serde::{Deserialize, Serialize};

use crate::airport::AirportLocation;

/// Airport a new game starts at when no location is requested.
pub const DEFAULT_START_LOCATION: &str = "EFHK";

pub const START_CO2_POINTS: i64 = 0;
pub const START_DIAMONDS: i64 = 0;
pub const START_MONEY: i64 = 1000;

pub const FLIGHT_DIAMONDS: i64 = 5;
pub const FLIGHT_MONEY: i64 = 950;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub name: String,
    pub co2_points: i64,
    pub diamonds: i64,
    pub money: i64,
    pub location: AirportLocation,
}

impl GameStatus {
    /// Status of a player who has just started at `location`.
    pub fn new_game(player: impl Into<String>, location: AirportLocation) -> Self {
        Self {
            name: player.into(),
            co2_points: START_CO2_POINTS,
            diamonds: START_DIAMONDS,
            money: START_MONEY,
            location,
        }
    }
}

/// Status reported after a flight. It names no player since flights are
/// not tied to any stored game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    pub co2_points: i64,
    pub diamonds: i64,
    pub money: i64,
    pub location: AirportLocation,
}

impl FlightStatus {
    pub fn arrived(consumption: i64, destination: AirportLocation) -> Self {
        Self {
            co2_points: consumption,
            diamonds: FLIGHT_DIAMONDS,
            money: FLIGHT_MONEY,
            location: destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub reached: bool,
}

impl Goal {
    fn unreached(name: &str, description: &str, icon: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            reached: false,
        }
    }

    /// The goals handed out with every new game.
    pub fn defaults() -> Vec<Goal> {
        vec![
            Goal::unreached(
                "Earn 10 Diamonds",
                "Collect 10 diamonds by completing tasks",
                "/img/goal1.webp",
            ),
            Goal::unreached(
                "Reduce CO2",
                "Fly sustainably to reduce CO2 emissions.",
                "/img/goal2.webp",
            ),
        ]
    }
}
