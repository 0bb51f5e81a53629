//! Configuration types.
//!
//! Strongly-typed structures deserialized from the YAML configuration
//! files.

use serde::Deserialize;

/// Listen address for the HTTP server (`server.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host or address to bind, e.g. "127.0.0.1".
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

/// An account created in the store at startup (`users.yaml`).
///
/// There is no signup endpoint; accounts are provisioned here. Hashes
/// are bcrypt strings, never plaintext.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    /// Login email, unique per account.
    pub email: String,
    /// Display name.
    pub name: String,
    /// bcrypt hash of the account password.
    pub password_hash: String,
}

/// Seed accounts configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersConfig {
    /// The accounts to create at startup.
    pub users: Vec<SeedUser>,
}
