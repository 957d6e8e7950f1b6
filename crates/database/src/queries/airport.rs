use model::airport::{Airport, AirportLocation};
use sqlx::{Executor, MySql};

use crate::data_model::airport::{AirportLocationRow, AirportRow};

use super::convert_error;

pub async fn get_all<'c, E>(executor: E) -> crate::Result<Vec<Airport>>
where
    E: Executor<'c, Database = MySql>,
{
    let results: Vec<AirportRow> = sqlx::query_as(
        "
        SELECT
            icao_code,
            name,
            country,
            latitude,
            longitude,
            has_charging_station
        FROM
            airport;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?;
    Ok(results.into_iter().map(AirportRow::to_model).collect())
}

pub async fn get_location<'c, E>(
    executor: E,
    icao_code: &str,
) -> crate::Result<AirportLocation>
where
    E: Executor<'c, Database = MySql>,
{
    sqlx::query_as(
        "
        SELECT
            icao_code,
            name,
            latitude,
            longitude,
            has_charging_station
        FROM
            airport
        WHERE
            icao_code = ?;
        ",
    )
    .bind(icao_code)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: AirportLocationRow| row.to_model())
}
