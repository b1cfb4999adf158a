use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Body shape shared by every failing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: String,
    pub error_message: String,
}

/// HTTP error with a structured JSON body. Built from `ServiceError` at a
/// single translation point; handlers never map statuses themselves.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_code: self.code.to_string(),
            error_message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg),
            ServiceError::Model(ModelError::Validation(msg)) => Self::validation(msg),
            ServiceError::Model(ModelError::Db(detail)) => {
                error!(err = %detail, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_FAILURE", "storage failure")
            }
            ServiceError::Db(detail) => {
                // Full detail stays server-side; the caller gets a generic message.
                error!(err = %detail, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_FAILURE", "storage failure")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let e = JsonApiError::from(ServiceError::not_found("product"));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, "NOT_FOUND");
        assert_eq!(e.message, "product not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let e = JsonApiError::from(ServiceError::Validation("size must be between 1 and 100".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, "VALIDATION_FAILED");

        let e = JsonApiError::from(ServiceError::Model(ModelError::Validation(
            "category must not be blank".into(),
        )));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_409() {
        let e = JsonApiError::from(ServiceError::Conflict("duplicate".into()));
        assert_eq!(e.status, StatusCode::CONFLICT);
        assert_eq!(e.code, "CONFLICT");
    }

    #[test]
    fn db_failure_is_opaque_500() {
        let e = JsonApiError::from(ServiceError::Db("connection refused by peer".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.code, "PERSISTENCE_FAILURE");
        // driver detail must not leak to the caller
        assert!(!e.message.contains("connection refused"));
    }

    #[test]
    fn error_body_uses_camel_case_keys() {
        let body = ErrorBody {
            error_code: "NOT_FOUND".into(),
            error_message: "product not found".into(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("errorCode").is_some());
        assert!(json.get("errorMessage").is_some());
    }
}
