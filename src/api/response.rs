//! Error-to-status mapping at the response boundary.

use super::payload::FieldError;
use crate::auth::domain::AuthError;
use crate::task::services::TaskServiceError;
use crate::user::services::UserServiceError;
use serde::Serialize;

/// Generic message returned for unhandled failures; internal detail is
/// suppressed outside development logs.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON body of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// A single message, e.g. `{"message": "task not found"}`.
    Message {
        /// Human-readable reason.
        message: String,
    },
    /// A structured validation error list, e.g. `{"errors": [...]}`.
    Fields {
        /// Per-field failures.
        errors: Vec<FieldError>,
    },
}

impl ErrorBody {
    fn message(text: impl Into<String>) -> Self {
        Self::Message {
            message: text.into(),
        }
    }
}

/// Status and body of a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Serializable response body.
    pub body: ErrorBody,
}

impl ErrorResponse {
    const fn new(status: u16, body: ErrorBody) -> Self {
        Self { status, body }
    }
}

/// Maps an authentication failure. Every variant is the same
/// caller-visible outcome: the session is not accepted.
#[must_use]
pub fn auth_error_response(err: &AuthError) -> ErrorResponse {
    // Deliberately uniform: the response must not reveal why the token
    // was rejected.
    match err {
        AuthError::MissingToken | AuthError::InvalidToken(_) | AuthError::ExpiredToken => {
            ErrorResponse::new(401, ErrorBody::message("unauthenticated"))
        }
    }
}

/// Maps a task service failure.
#[must_use]
pub fn task_error_response(err: &TaskServiceError) -> ErrorResponse {
    match err {
        TaskServiceError::Validation(validation) => {
            ErrorResponse::new(400, ErrorBody::message(validation.to_string()))
        }
        TaskServiceError::Forbidden => ErrorResponse::new(403, ErrorBody::message(err.to_string())),
        TaskServiceError::TaskNotFound(_)
        | TaskServiceError::NotificationNotFound(_)
        | TaskServiceError::AssigneeNotFound(_) => {
            ErrorResponse::new(404, ErrorBody::message(err.to_string()))
        }
        TaskServiceError::Repository(_) | TaskServiceError::Users(_) => {
            ErrorResponse::new(500, ErrorBody::message(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// Maps a user directory service failure.
#[must_use]
pub fn user_error_response(err: &UserServiceError) -> ErrorResponse {
    match err {
        UserServiceError::Forbidden => ErrorResponse::new(403, ErrorBody::message(err.to_string())),
        UserServiceError::NotFound(_) => {
            ErrorResponse::new(404, ErrorBody::message(err.to_string()))
        }
        UserServiceError::Repository(_) => {
            ErrorResponse::new(500, ErrorBody::message(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// Wraps boundary validation failures as a 400 with the structured error
/// list.
#[must_use]
pub const fn validation_error_response(errors: Vec<FieldError>) -> ErrorResponse {
    ErrorResponse::new(400, ErrorBody::Fields { errors })
}
