//! Core data models for the shift ledger.
//!
//! This module contains all the domain models used throughout the service.

mod restaurant;
mod shift;
mod user;

pub use restaurant::{Restaurant, RestaurantSummary};
pub use shift::{DerivedShift, RawField, RawShift, StoredShift};
pub use user::User;
