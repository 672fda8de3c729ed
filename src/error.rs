//! Error types shared by the stores, the services and the HTTP layer.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Fatal persistence failure. Terminates the operation that raised it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to begin transaction for {operation}: {source}")]
    Begin {
        operation: &'static str,
        source: sqlx::Error,
    },

    #[error("{operation} failed: {source}")]
    Query {
        operation: &'static str,
        source: sqlx::Error,
    },

    #[error("failed to commit {operation}: {source}")]
    Commit {
        operation: &'static str,
        source: sqlx::Error,
    },

    #[error("{operation} failed ({cause}) and the rollback failed too: {rollback}")]
    Rollback {
        operation: &'static str,
        cause: sqlx::Error,
        #[source]
        rollback: sqlx::Error,
    },
}

impl StoreError {
    /// Whether the database rejected the statement because of the data it was
    /// given (constraint violations) rather than because it is unavailable.
    pub fn is_bad_input(&self) -> bool {
        let err = match self {
            Self::Query { source, .. } => source,
            Self::Rollback { cause, .. } => cause,
            Self::Begin { .. } | Self::Commit { .. } => return false,
        };

        match err {
            sqlx::Error::Database(db_err) => {
                db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
            }
            _ => false,
        }
    }
}

/// Input rejected by a business rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be blank")]
    Blank { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("an account with these credentials already exists")]
    DuplicateAccount,

    #[error("account {0} does not exist")]
    UnknownAuthor(i32),
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid username or password")]
    AuthenticationFailed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum MessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("message {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error returned by request handlers, rendered as a JSON body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            Self::Store(e) if e.is_bad_input() => {
                tracing::warn!("Database rejected input: {}", e);
                (StatusCode::BAD_REQUEST, "request rejected by database".to_string())
            }
            Self::Store(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::Store(e) => Self::Store(e),
            AccountError::AuthenticationFailed => Self::Unauthorized(e.to_string()),
            AccountError::Validation(_) => Self::BadRequest(e.to_string()),
        }
    }
}

impl From<MessageError> for ApiError {
    fn from(e: MessageError) -> Self {
        match e {
            MessageError::Store(e) => Self::Store(e),
            MessageError::Validation(_) | MessageError::NotFound(_) => {
                Self::BadRequest(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
