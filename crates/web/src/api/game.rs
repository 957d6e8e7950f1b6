//! `/newgame` and `/flyto`.
//!
//! Both routes look up a single airport and wrap it in a status that is
//! built from constants and the query string. Nothing about the game is
//! read from or written to the database.

use std::num::IntErrorKind;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use database::{Database, DatabaseConnection, DatabaseError};
use model::{
    airport::AirportLocation,
    game::{FlightStatus, GameStatus, Goal, DEFAULT_START_LOCATION},
};
use serde::Serialize;

use crate::{
    common::{close_connection, QueryParams, RouteErrorResponse},
    RouteResult, WebState,
};

#[derive(Debug, Default)]
pub struct NewGameQuery {
    pub player: Option<String>,
    pub loc: Option<String>,
}

impl NewGameQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            player: params.first("player"),
            loc: params.first("loc"),
        }
    }

    /// Returns the player name and the ICAO code of the start location.
    pub fn validate(self) -> RouteResult<(String, String)> {
        let player = self
            .player
            .filter(|player| !player.is_empty())
            .ok_or_else(|| RouteErrorResponse::bad_request("Player name is required"))?;
        let loc = self
            .loc
            .unwrap_or_else(|| DEFAULT_START_LOCATION.to_owned());
        Ok((player, loc))
    }
}

#[derive(Debug, Default)]
pub struct FlyToQuery {
    /// Sent by the client but not checked against anything.
    pub game: Option<String>,
    pub dest: Option<String>,
    pub consumption: Option<String>,
}

impl FlyToQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            game: params.first("game"),
            dest: params.first("dest"),
            consumption: params.first("consumption"),
        }
    }

    /// Returns the destination ICAO code and the CO2 consumption.
    pub fn validate(self) -> RouteResult<(String, i64)> {
        let (dest, consumption) = match (self.dest, self.consumption) {
            (Some(dest), Some(consumption))
                if !dest.is_empty() && !consumption.is_empty() =>
            {
                (dest, consumption)
            }
            _ => {
                return Err(RouteErrorResponse::bad_request(
                    "Destination and CO2 consumption are required",
                ))
            }
        };
        Ok((dest, parse_consumption(&consumption)?))
    }
}

/// Parses a decimal integer with optional sign, surrounding whitespace and
/// single underscores between digits (`1_000`).
fn parse_consumption(raw: &str) -> RouteResult<i64> {
    let not_an_integer = || RouteErrorResponse::bad_request("CO2 consumption must be an integer");

    let trimmed = raw.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return Err(not_an_integer());
    }

    trimmed.replace('_', "").parse::<i64>().map_err(|why| match why.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            RouteErrorResponse::bad_request(format!(
                "CO2 consumption must be between {} and {}",
                i64::MIN,
                i64::MAX
            ))
        }
        _ => not_an_integer(),
    })
}

#[derive(Debug, Serialize)]
pub struct NewGameDto {
    pub status: GameStatus,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Serialize)]
pub struct FlyToDto {
    pub status: FlightStatus,
}

pub(crate) async fn new_game<D: Database>(
    State(WebState { database }): State<WebState<D>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> RouteResult<Json<NewGameDto>> {
    let params = QueryParams::from_query(query)?;
    let (player, loc) = NewGameQuery::from_params(&params).validate()?;
    let location = find_location(&database, &loc, "Failed to initialize the game").await?;

    Ok(Json(NewGameDto {
        status: GameStatus::new_game(player, location),
        goals: Goal::defaults(),
    }))
}

pub(crate) async fn fly_to<D: Database>(
    State(WebState { database }): State<WebState<D>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> RouteResult<Json<FlyToDto>> {
    let params = QueryParams::from_query(query)?;
    let (dest, consumption) = FlyToQuery::from_params(&params).validate()?;
    let destination = find_location(&database, &dest, "Failed to process the flight").await?;

    Ok(Json(FlyToDto {
        status: FlightStatus::arrived(consumption, destination),
    }))
}

/// Opens a connection, looks up one airport and closes the connection
/// again before the outcome is turned into a response.
async fn find_location<D: Database>(
    database: &D,
    icao_code: &str,
    query_failed_message: &str,
) -> RouteResult<AirportLocation> {
    let mut connection = database.connect().await.map_err(|why| {
        log::error!("Error connecting to the database: {}", why);
        RouteErrorResponse::from(why)
    })?;
    let location = connection.airport_location(icao_code).await;
    close_connection(connection).await;

    location.map_err(|why| match why {
        DatabaseError::NotFound => RouteErrorResponse::airport_not_found(icao_code),
        why => {
            log::error!("{}: {}", query_failed_message, why);
            RouteErrorResponse::from(why).with_message(query_failed_message)
        }
    })
}
