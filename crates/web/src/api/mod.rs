use axum::{routing::get, Router};
use database::Database;

use crate::WebState;

pub mod airports;
pub mod game;

pub fn routes<D: Database>(state: WebState<D>) -> Router {
    Router::new()
        .route("/airports", get(airports::get_airports::<D>))
        .route("/newgame", get(game::new_game::<D>))
        .route("/flyto", get(game::fly_to::<D>))
        .with_state(state)
}
