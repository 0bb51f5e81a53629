//! User model.

use serde::Serialize;

/// An account that can log in and own restaurants.
///
/// The password hash never leaves the process: it is skipped during
/// serialization, and login responses expose only the public profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Login email, unique per account.
    pub email: String,
    /// Display name.
    pub name: String,
    /// bcrypt hash of the account password.
    #[serde(skip_serializing)]
    pub password_hash: String,
}
