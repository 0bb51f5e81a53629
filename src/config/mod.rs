//! Configuration for the shift ledger service.
//!
//! Configuration lives in a directory of YAML files: `server.yaml` for
//! the listen address and `users.yaml` for the seed accounts loaded at
//! startup.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SeedUser, ServerConfig, UsersConfig};
