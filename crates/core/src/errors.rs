//! Core error types for the fitness tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whichever layer implements the repository
//! traits.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::permissions::Permission;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker core.
///
/// The pure calculators never return these; they exist for the services and
/// for the boundary checks request handlers run before calling into the core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("User {user_id} lacks permission '{permission}'")]
    PermissionDenied {
        user_id: String,
        permission: Permission,
    },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for repository operations.
///
/// Every variant carries a string so repository implementations can map their
/// own driver errors without this crate depending on a driver.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated, e.g. an achievement earned twice.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_wraps_into_root_error() {
        let err: Error = DatabaseError::NotFound("goal g-1".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Database operation failed: Record not found: goal g-1"
        );
    }

    #[test]
    fn test_permission_denied_message_names_permission() {
        let err = Error::PermissionDenied {
            user_id: "u-1".to_string(),
            permission: Permission::ManageGoals,
        };
        assert_eq!(err.to_string(), "User u-1 lacks permission 'manage_goals'");
    }

    #[test]
    fn test_decimal_parse_error_becomes_validation_error() {
        let parse_err = "not-a-number".parse::<rust_decimal::Decimal>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));
    }
}
