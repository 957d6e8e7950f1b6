use std::{env, process};

use database::{DatabaseConnectionInfo, MySqlDatabase};
use web::{start_web_server, WebState, DEFAULT_BIND_ADDRESS};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let database = MySqlDatabase::new(&database_connection_info);

    // web server
    let bind_address =
        env::var("WEB_BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned());
    if let Err(why) = start_web_server(WebState { database }, &bind_address).await {
        log::error!("web server stopped: {}", why);
        process::exit(1);
    }
}
