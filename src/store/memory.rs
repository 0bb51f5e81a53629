//! In-memory store implementation.

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::Utc;

use crate::models::{DerivedShift, Restaurant, RestaurantSummary, StoredShift, User};

use super::Store;

/// An in-process [`Store`] backed by `RwLock`-guarded collections.
///
/// Identifiers are assigned from monotonically increasing counters
/// starting at 1. Suitable for development, tests, and single-node
/// deployments; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    restaurants: Vec<Restaurant>,
    // (user_id, restaurant_id) membership pairs
    links: HashSet<(i64, i64)>,
    shifts: Vec<StoredShift>,
    next_user_id: i64,
    next_restaurant_id: i64,
    next_shift_id: i64,
}

impl Inner {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

impl Store for MemoryStore {
    fn insert_user(&self, email: &str, name: &str, password_hash: &str) -> User {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let user = User {
            id: Inner::next_id(&mut inner.next_user_id),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.users.push(user.clone());
        user
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.users.iter().find(|u| u.email == email).cloned()
    }

    fn create_restaurant(&self, name: &str, owner_id: i64) -> Restaurant {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let restaurant = Restaurant {
            id: Inner::next_id(&mut inner.next_restaurant_id),
            name: name.to_string(),
        };
        inner.restaurants.push(restaurant.clone());
        inner.links.insert((owner_id, restaurant.id));
        restaurant
    }

    fn restaurants_for_user(&self, user_id: i64) -> Vec<RestaurantSummary> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .restaurants
            .iter()
            .filter(|r| inner.links.contains(&(user_id, r.id)))
            .map(|r| RestaurantSummary {
                id: r.id,
                name: r.name.clone(),
                shift_count: inner
                    .shifts
                    .iter()
                    .filter(|s| s.restaurant_id == r.id)
                    .count(),
            })
            .collect()
    }

    fn restaurant_for_user(&self, user_id: i64, restaurant_id: i64) -> Option<Restaurant> {
        let inner = self.inner.read().expect("store lock poisoned");
        if !inner.links.contains(&(user_id, restaurant_id)) {
            return None;
        }
        inner
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned()
    }

    fn user_has_restaurant(&self, user_id: i64, restaurant_id: i64) -> bool {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.links.contains(&(user_id, restaurant_id))
    }

    fn save_shift(&self, shift: DerivedShift, user_id: i64, restaurant_id: i64) -> StoredShift {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let stored = StoredShift {
            id: Inner::next_id(&mut inner.next_shift_id),
            created_at: Utc::now(),
            restaurant_id,
            user_id,
            shift,
        };
        inner.shifts.push(stored.clone());
        stored
    }

    fn shifts_for_restaurant(&self, restaurant_id: i64) -> Vec<StoredShift> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut shifts: Vec<StoredShift> = inner
            .shifts
            .iter()
            .filter(|s| s.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        shifts.sort_by(|a, b| b.shift.date.cmp(&a.shift.date));
        shifts
    }
}
