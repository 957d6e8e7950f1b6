use axum::{extract::State, Json};
use database::{Database, DatabaseConnection};
use model::airport::Airport;
use serde::Serialize;

use crate::{
    common::{close_connection, RouteErrorResponse},
    RouteResult, WebState,
};

#[derive(Debug, Serialize)]
pub struct AirportsDto {
    pub airports: Vec<Airport>,
}

pub(crate) async fn get_airports<D: Database>(
    State(WebState { database }): State<WebState<D>>,
) -> RouteResult<Json<AirportsDto>> {
    let mut connection = database.connect().await.map_err(|why| {
        log::error!("Error connecting to the database: {}", why);
        RouteErrorResponse::from(why)
    })?;
    let airports = connection.airports().await;
    close_connection(connection).await;

    airports
        .map(|airports| Json(AirportsDto { airports }))
        .map_err(|why| {
            log::error!("Error fetching airports: {}", why);
            RouteErrorResponse::from(why).with_message("Error fetching airport data")
        })
}
