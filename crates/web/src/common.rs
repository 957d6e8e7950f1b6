use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use database::{DatabaseConnection, DatabaseError};
use serde::Serialize;

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

pub(crate) const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to the database";

pub(crate) async fn route_not_found(
    method: Method,
    OriginalUri(original_uri): OriginalUri,
) -> impl IntoResponse {
    log::debug!("no route for {} {}", method, original_uri.path());
    RouteErrorResponse::new(StatusCode::NOT_FOUND)
}

/// Query string as key/value pairs in request order. Repeated keys are
/// kept, lookups answer with the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    pub fn from_query(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> RouteResult<Self> {
        query
            .map(|Query(pairs)| Self::new(pairs))
            .map_err(|why| RouteErrorResponse::bad_request(why.body_text()))
    }

    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

/// Closes a request's connection once its query is done. A failing close
/// is only logged since the query result is already in hand.
pub(crate) async fn close_connection<C: DatabaseConnection>(connection: C) {
    if let Err(why) = connection.close().await {
        log::warn!("Error closing the database connection: {}", why);
    }
}

// - Commonly used responses -

/// Error body of every route: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    #[serde(rename = "error")]
    pub message: String,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        let message = status_code
            .canonical_reason()
            .unwrap_or("Something went wrong");
        Self {
            status_code,
            message: message.to_owned(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_message(message)
    }

    pub fn airport_not_found(icao_code: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_message(format!("Airport with ICAO code '{}' not found", icao_code))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<DatabaseError> for RouteErrorResponse {
    fn from(value: DatabaseError) -> Self {
        match value {
            DatabaseError::Connection(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_message(CONNECTION_FAILED_MESSAGE)
            }
            DatabaseError::NotFound => Self::new(StatusCode::NOT_FOUND),
            DatabaseError::Other(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn serializes_message_as_error() {
        let response = RouteErrorResponse::bad_request("Player name is required");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "error": "Player name is required" })
        );
    }

    #[test]
    fn connection_errors_use_fixed_message() {
        let why = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let response = RouteErrorResponse::from(DatabaseError::Connection(Box::new(why)));
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.message, "Failed to connect to the database");
    }

    #[test]
    fn query_params_answer_with_first_value() {
        let params = QueryParams::new(vec![
            ("game".into(), "1".into()),
            ("dest".into(), "EFHK".into()),
            ("game".into(), "2".into()),
        ]);
        assert_eq!(params.first("game").as_deref(), Some("1"));
        assert_eq!(params.first("dest").as_deref(), Some("EFHK"));
        assert_eq!(params.first("consumption"), None);
    }

    #[test]
    fn not_found_names_the_code() {
        let response = RouteErrorResponse::airport_not_found("XXXX");
        assert_eq!(response.status_code, StatusCode::NOT_FOUND);
        assert_eq!(response.message, "Airport with ICAO code 'XXXX' not found");
    }
}
