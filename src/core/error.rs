use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Client-facing description of a failure.
///
/// Attached to error responses as an extension so the envelope middleware can
/// rebuild the body with the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub status: StatusCode,
    pub message: String,
    pub error: String,
}

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const INTERNAL_SERVER_ERROR_LABEL: &str = "Error";

impl ErrorDetail {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            error: INTERNAL_SERVER_ERROR_LABEL.to_string(),
        }
    }

    /// Default detail for a response that carries only a status code.
    pub fn from_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::FORBIDDEN => "Forbidden",
            StatusCode::NOT_FOUND => "Resource not found",
            StatusCode::CONFLICT => "Resource conflict",
            s if s.is_client_error() => s.canonical_reason().unwrap_or("Client error"),
            _ => return Self::internal(),
        };

        Self::new(status, message)
    }
}

impl AppError {
    pub fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorDetail::internal()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorDetail::internal()
            }
            AppError::NotFound(msg) => ErrorDetail::new(StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(messages) => {
                ErrorDetail::new(StatusCode::BAD_REQUEST, messages.join(", "))
            }
            AppError::BadRequest(msg) => ErrorDetail::new(StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => {
                ErrorDetail::new(StatusCode::UNAUTHORIZED, msg.clone())
            }
            AppError::Forbidden(msg) => ErrorDetail::new(StatusCode::FORBIDDEN, msg.clone()),
            AppError::Conflict(msg) => ErrorDetail::new(StatusCode::CONFLICT, msg.clone()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();

        AppError::Validation(messages)
    }
}

impl IntoResponse for ErrorDetail {
    fn into_response(self) -> Response {
        // Path is filled in by the envelope middleware.
        let body = Json(ErrorResponse::new(&self, ""));

        let mut response = (self.status, body).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.detail().into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name should not be empty"))]
        name: String,
        #[validate(range(min = 0, message = "displayOrder must not be negative"))]
        display_order: i32,
    }

    #[test]
    fn test_known_errors_keep_their_message() {
        let detail = AppError::NotFound("Category with ID 1 not found".to_string()).detail();
        assert_eq!(detail.status, StatusCode::NOT_FOUND);
        assert_eq!(detail.message, "Category with ID 1 not found");
        assert_eq!(detail.error, "Not Found");

        let detail = AppError::Conflict("taken".to_string()).detail();
        assert_eq!(detail.status, StatusCode::CONFLICT);
        assert_eq!(detail.error, "Conflict");
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let detail = AppError::Internal("connection reset by peer".to_string()).detail();
        assert_eq!(detail, ErrorDetail::internal());

        let detail = AppError::Database(sqlx::Error::PoolTimedOut).detail();
        assert_eq!(detail.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail.message, "Internal server error");
        assert_eq!(detail.error, "Error");
    }

    #[test]
    fn test_validation_messages_are_joined() {
        let err = AppError::Validation(vec!["a is bad".to_string(), "b is bad".to_string()]);
        let detail = err.detail();
        assert_eq!(detail.status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.message, "a is bad, b is bad");
        assert_eq!(detail.error, "Bad Request");
    }

    #[test]
    fn test_validation_errors_conversion_is_ordered_by_field() {
        let sample = Sample {
            name: String::new(),
            display_order: -1,
        };
        let err: AppError = sample.validate().unwrap_err().into();

        match err {
            AppError::Validation(messages) => assert_eq!(
                messages,
                vec![
                    "displayOrder must not be negative".to_string(),
                    "name should not be empty".to_string(),
                ]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_detail_response_is_tagged() {
        let detail = ErrorDetail::new(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded");

        let response = detail.clone().into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.extensions().get::<ErrorDetail>(), Some(&detail));
    }

    #[test]
    fn test_default_detail_for_bare_status() {
        assert_eq!(
            ErrorDetail::from_status(StatusCode::NOT_FOUND).message,
            "Resource not found"
        );
        assert_eq!(
            ErrorDetail::from_status(StatusCode::METHOD_NOT_ALLOWED).message,
            "Method Not Allowed"
        );
        assert_eq!(
            ErrorDetail::from_status(StatusCode::BAD_GATEWAY),
            ErrorDetail::internal()
        );
    }
}
