use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// JSON error body: `{"error": <category>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_client_error() {
            Self::new(StatusCode::BAD_REQUEST, "Invalid Argument", Some(e.to_string()))
        } else {
            error!(err = %e, "service call failed");
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", Some(e.to_string()))
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_maps_to_bad_request() {
        let e = JsonApiError::from(ServiceError::no_section(3));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.detail.as_deref(), Some("There is no section with the id 3"));
    }

    #[test]
    fn db_failure_maps_to_server_error() {
        let e = JsonApiError::from(ServiceError::Model(ModelError::Db("disk full".into())));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
