use std::{env, error, fmt, result};

use async_trait::async_trait;
use model::airport::{Airport, AirportLocation};
use queries::convert_error;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlConnection},
    ConnectOptions, Connection,
};

pub mod data_model;
pub mod queries;

pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "flight_game";

#[derive(Debug)]
pub enum DatabaseError {
    /// The server could not be reached or refused the credentials.
    Connection(Box<dyn error::Error + Send + Sync>),
    NotFound,
    Other(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(why) => write!(f, "could not connect to database: {}", why),
            Self::NotFound => write!(f, "row not found"),
            Self::Other(why) => write!(f, "{}", why),
        }
    }
}

impl error::Error for DatabaseError {}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Something that hands out a fresh connection per request.
#[async_trait]
pub trait Database: Clone + Send + Sync + 'static {
    type Connection: DatabaseConnection;

    async fn connect(&self) -> Result<Self::Connection>;
}

/// A single open connection. It is used for one query and then closed.
#[async_trait]
pub trait DatabaseConnection: Send + Sized {
    async fn airports(&mut self) -> Result<Vec<Airport>>;

    /// Fails with [`DatabaseError::NotFound`] when no airport has the code.
    async fn airport_location(&mut self, icao_code: &str) -> Result<AirportLocation>;

    async fn close(self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Username and password are required, everything else falls back to
    /// a local `flight_game` database.
    pub fn from_vars<F>(var: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = var("DATABASE_USER")?;
        let password = var("DATABASE_PASSWORD")?;
        let hostname = var("DATABASE_HOST").unwrap_or_else(|| DEFAULT_HOSTNAME.to_owned());
        let port: u16 = match var("DATABASE_PORT") {
            Some(port) => port.parse().ok()?,
            None => DEFAULT_PORT,
        };
        let database = var("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_owned());
        Some(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub(self) fn mysql_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.hostname)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .log_statements(log::LevelFilter::Debug)
    }
}

/// MariaDB (or MySQL) holding the `airport` table. No pool is kept,
/// every call to [`Database::connect`] dials the server again.
#[derive(Clone)]
pub struct MySqlDatabase {
    options: MySqlConnectOptions,
}

impl MySqlDatabase {
    pub fn new(database_connection_info: &DatabaseConnectionInfo) -> Self {
        Self {
            options: database_connection_info.mysql_options(),
        }
    }
}

pub struct MySqlDatabaseConnection {
    connection: MySqlConnection,
}

#[async_trait]
impl Database for MySqlDatabase {
    type Connection = MySqlDatabaseConnection;

    async fn connect(&self) -> Result<Self::Connection> {
        let connection = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(|why| DatabaseError::Connection(Box::new(why)))?;
        log::debug!("connected to the database");
        Ok(MySqlDatabaseConnection { connection })
    }
}

#[async_trait]
impl DatabaseConnection for MySqlDatabaseConnection {
    async fn airports(&mut self) -> Result<Vec<Airport>> {
        queries::airport::get_all(&mut self.connection).await
    }

    async fn airport_location(&mut self, icao_code: &str) -> Result<AirportLocation> {
        queries::airport::get_location(&mut self.connection, icao_code).await
    }

    async fn close(self) -> Result<()> {
        self.connection.close().await.map_err(convert_error)
    }
}
