//! Response types for the shift ledger API.
//!
//! This module defines the success payloads, the error response
//! structure, and the mapping from domain errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{Restaurant, StoredShift, User};

/// Public view of an account, safe to return to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Confirmation message.
    pub message: String,
    /// Bearer token for subsequent requests.
    pub token: Uuid,
    /// The authenticated account.
    pub user: UserProfile,
}

/// Response body for a created restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRestaurantResponse {
    /// Confirmation message.
    pub message: String,
    /// The created restaurant.
    pub restaurant: Restaurant,
}

/// Response body for a restaurant detail lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDetailResponse {
    /// The restaurant itself.
    pub restaurant: Restaurant,
    /// Its shifts, newest date first.
    pub shifts: Vec<StoredShift>,
}

/// Response body for a created shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored shift with every derived field populated.
    pub shift: StoredShift,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            LedgerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            LedgerError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    format!("Missing required field: {}", field),
                    format!("Required field '{}' was not provided in the request", field),
                ),
            },
            LedgerError::Unauthenticated => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::new("UNAUTHENTICATED", "Authentication required"),
            },
            LedgerError::InvalidCredentials => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::new("INVALID_CREDENTIALS", "Invalid email or password"),
            },
            LedgerError::AccessDenied { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("ACCESS_DENIED", "Access denied"),
            },
            LedgerError::RestaurantNotFound { restaurant_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "NOT_FOUND",
                    format!("Restaurant not found: {}", restaurant_id),
                ),
            },
            LedgerError::PasswordHash { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CREDENTIAL_ERROR",
                    "Credential check failed",
                    message,
                ),
            },
        }
    }
}
