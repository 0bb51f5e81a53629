//! Persistence collaborator for the shift ledger.
//!
//! The service talks to storage through the [`Store`] trait so the
//! backend can be swapped without touching handlers or the calculator.
//! [`MemoryStore`] is the in-process implementation.

mod memory;

pub use memory::MemoryStore;

use crate::models::{DerivedShift, Restaurant, RestaurantSummary, StoredShift, User};

/// Operations the service needs from a storage backend.
///
/// Implementations must be safe to share across request handlers; all
/// methods take `&self` and the trait requires `Send + Sync`.
pub trait Store: Send + Sync {
    /// Creates a user account and returns it with its assigned id.
    fn insert_user(&self, email: &str, name: &str, password_hash: &str) -> User;

    /// Looks up a user by login email.
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// Creates a restaurant and links it to its owning user.
    fn create_restaurant(&self, name: &str, owner_id: i64) -> Restaurant;

    /// Lists the restaurants linked to a user, each with its shift count.
    fn restaurants_for_user(&self, user_id: i64) -> Vec<RestaurantSummary>;

    /// Fetches one restaurant, but only when the user is linked to it.
    fn restaurant_for_user(&self, user_id: i64, restaurant_id: i64) -> Option<Restaurant>;

    /// Returns true when the user is linked to the restaurant.
    ///
    /// This is the existence check that gates shift writes.
    fn user_has_restaurant(&self, user_id: i64, restaurant_id: i64) -> bool;

    /// Persists a derived shift, assigning its id and creation timestamp.
    ///
    /// The record is associated with exactly one restaurant and one user
    /// at creation time and is never reassigned or mutated afterwards.
    fn save_shift(&self, shift: DerivedShift, user_id: i64, restaurant_id: i64) -> StoredShift;

    /// Lists a restaurant's shifts, newest date first.
    fn shifts_for_restaurant(&self, restaurant_id: i64) -> Vec<StoredShift>;
}
