pub use crate::common::RouteResult;

use axum::{response::Html, routing::get, Router};
use database::Database;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod common;
pub mod middleware;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Clone)]
pub struct WebState<D> {
    pub database: D,
}

pub async fn start_web_server<D: Database>(
    state: WebState<D>,
    bind_address: &str,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_address).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state).into_make_service()).await?;

    Ok(())
}

/// The whole service: game routes, the welcome page, CORS for every origin
/// and request logging.
pub fn app<D: Database>(state: WebState<D>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .merge(api::routes(state))
        .fallback(common::route_not_found)
        .layer(axum::middleware::from_fn(
            middleware::request_log::request_log_middleware,
        ))
        .layer(cors)
}

async fn home() -> Html<&'static str> {
    Html("<h1>Welcome to the Flight Game API!</h1>")
}
