//! HTTP API module for the shift ledger.
//!
//! This module provides the REST endpoints for login, restaurant
//! management, and shift creation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateRestaurantRequest, CreateShiftRequest, LoginRequest};
pub use response::ApiError;
pub use state::AppState;
