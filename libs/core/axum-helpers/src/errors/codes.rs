//! Error codes attached to error logs.
//!
//! Clients only see the `error` message; the numeric code goes to the
//! `error_code` field of the log event so failures can be grouped in monitoring.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// One or more field rules failed
    ValidationError,
    /// Request body is not valid JSON
    InvalidJson,
    /// Malformed request outside the field rules
    BadRequest,
    /// Resource or route does not exist
    NotFound,

    // Server errors (1500s)
    InternalError,
    ServiceUnavailable,

    // Database errors (2000s)
    /// Could not reach the database or acquire a pooled connection
    DatabaseConnection,
    /// A query failed
    DatabaseQuery,
    /// The row targeted by an update vanished
    DatabaseRecordNotFound,
    DatabaseUnhandled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseQuery => "DATABASE_QUERY",
            Self::DatabaseRecordNotFound => "DATABASE_RECORD_NOT_FOUND",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1503,
            Self::DatabaseConnection => 2001,
            Self::DatabaseQuery => 2002,
            Self::DatabaseRecordNotFound => 2003,
            Self::DatabaseUnhandled => 2099,
        }
    }

    /// Message sent to the client when the error carries none of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON body",
            Self::BadRequest => "Bad request",
            Self::NotFound => "The requested resource was not found",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseConnection => "Database is unavailable",
            Self::DatabaseQuery
            | Self::DatabaseRecordNotFound
            | Self::DatabaseUnhandled => "A database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}
