//! Error types for the shift ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving requests.

use thiserror::Error;

/// The main error type for the shift ledger.
///
/// All operations in the service return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_ledger::error::LedgerError;
///
/// let error = LedgerError::MissingField {
///     field: "netRevenue".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: netRevenue");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required raw field was absent from a submission.
    ///
    /// Raised by the caller before the calculator is invoked; the
    /// calculator itself never fails.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The wire name of the missing field.
        field: String,
    },

    /// The request carried no credential, or one the gate does not know.
    #[error("Authentication required")]
    Unauthenticated,

    /// Login failed. The message is deliberately generic so callers
    /// cannot distinguish an unknown email from a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The authenticated user is not linked to the target restaurant.
    #[error("User {user_id} has no access to restaurant {restaurant_id}")]
    AccessDenied {
        /// The authenticated user.
        user_id: i64,
        /// The restaurant the user tried to touch.
        restaurant_id: i64,
    },

    /// The restaurant does not exist (or is invisible to the caller).
    #[error("Restaurant not found: {restaurant_id}")]
    RestaurantNotFound {
        /// The requested restaurant id.
        restaurant_id: i64,
    },

    /// A stored password hash could not be checked.
    #[error("Credential check failed: {message}")]
    PasswordHash {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
