//! Restaurant model and list summaries.

use serde::{Deserialize, Serialize};

/// A restaurant that shifts are recorded against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Restaurant name as entered by the user.
    pub name: String,
}

/// A restaurant row in the authenticated user's list, with its shift count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Number of shifts recorded for this restaurant.
    pub shift_count: usize,
}
