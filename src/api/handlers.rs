//! HTTP request handlers for the shift ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::derive_totals;
use crate::error::LedgerError;
use crate::models::RestaurantSummary;

use super::request::{CreateRestaurantRequest, CreateShiftRequest, LoginRequest};
use super::response::{
    ApiError, ApiErrorResponse, CreateRestaurantResponse, CreateShiftResponse, LoginResponse,
    RestaurantDetailResponse, UserProfile,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route(
            "/restaurants",
            get(list_restaurants_handler).post(create_restaurant_handler),
        )
        .route("/restaurants/:id", get(restaurant_detail_handler))
        .route("/shifts", post(create_shift_handler))
        .with_state(state)
}

/// Turns a JSON extraction result into a request value or a 400 response.
fn decode_json<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Handler for POST /login.
///
/// Verifies the submitted credentials against the stored bcrypt hash
/// and mints a bearer token on success.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing login request");

    let request = decode_json(payload, correlation_id)?;
    let (email, password) = request.into_credentials()?;

    let Some(user) = state.store().find_user_by_email(&email) else {
        warn!(correlation_id = %correlation_id, "Login for unknown email");
        return Err(LedgerError::InvalidCredentials.into());
    };

    let password_valid =
        bcrypt::verify(&password, &user.password_hash).map_err(|err| LedgerError::PasswordHash {
            message: err.to_string(),
        })?;
    if !password_valid {
        warn!(
            correlation_id = %correlation_id,
            user_id = user.id,
            "Login with wrong password"
        );
        return Err(LedgerError::InvalidCredentials.into());
    }

    let token = state.gate().issue(user.id);
    info!(correlation_id = %correlation_id, user_id = user.id, "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserProfile::from(&user),
    }))
}

/// Handler for GET /restaurants.
///
/// Lists the restaurants linked to the authenticated user, each with
/// its shift count.
async fn list_restaurants_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RestaurantSummary>>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let user_id = state.gate().resolve(&headers)?;

    let restaurants = state.store().restaurants_for_user(user_id);
    info!(
        correlation_id = %correlation_id,
        user_id,
        count = restaurants.len(),
        "Listed restaurants"
    );

    Ok(Json(restaurants))
}

/// Handler for POST /restaurants.
///
/// Creates a restaurant and links it to the authenticated user.
async fn create_restaurant_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateRestaurantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRestaurantResponse>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let user_id = state.gate().resolve(&headers)?;

    let request = decode_json(payload, correlation_id)?;
    let name = request.into_name()?;

    let restaurant = state.store().create_restaurant(&name, user_id);
    info!(
        correlation_id = %correlation_id,
        user_id,
        restaurant_id = restaurant.id,
        "Restaurant created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateRestaurantResponse {
            message: "Restaurant created successfully".to_string(),
            restaurant,
        }),
    ))
}

/// Handler for GET /restaurants/{id}.
///
/// Returns the restaurant and its shifts, newest date first. A
/// restaurant the user is not linked to is indistinguishable from one
/// that does not exist.
async fn restaurant_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetailResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let user_id = state.gate().resolve(&headers)?;

    let Path(restaurant_id) = path.map_err(|rejection| ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::new(
            "VALIDATION_ERROR",
            format!("Invalid restaurant id: {}", rejection.body_text()),
        ),
    })?;

    let restaurant = state
        .store()
        .restaurant_for_user(user_id, restaurant_id)
        .ok_or(LedgerError::RestaurantNotFound { restaurant_id })?;
    let shifts = state.store().shifts_for_restaurant(restaurant_id);

    info!(
        correlation_id = %correlation_id,
        user_id,
        restaurant_id,
        shift_count = shifts.len(),
        "Restaurant detail served"
    );

    Ok(Json(RestaurantDetailResponse { restaurant, shifts }))
}

/// Handler for POST /shifts.
///
/// The core flow: authenticate, enforce the required-field
/// precondition, verify restaurant access, derive every computed field,
/// and persist the result.
async fn create_shift_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShiftResponse>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift submission");

    let user_id = state.gate().resolve(&headers)?;
    let request = decode_json(payload, correlation_id)?;
    let (restaurant_id, raw) = request.into_parts()?;
    state.gate().authorize(user_id, restaurant_id)?;

    let derived = derive_totals(&raw);
    let stored = state.store().save_shift(derived, user_id, restaurant_id);

    info!(
        correlation_id = %correlation_id,
        user_id,
        restaurant_id,
        shift_id = stored.id,
        net_revenue = %stored.shift.net_revenue,
        total_tips = %stored.shift.total_tips,
        "Shift created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateShiftResponse {
            message: "Shift created successfully".to_string(),
            shift: stored,
        }),
    ))
}
