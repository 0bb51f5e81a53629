//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{LedgerError, LedgerResult};

use super::types::{SeedUser, ServerConfig, UsersConfig};

/// Loads and provides access to the service configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/app/
/// ├── server.yaml   # listen host and port
/// └── users.yaml    # seed accounts (email, name, bcrypt hash)
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/app").unwrap();
/// println!("Binding {}:{}", loader.server().host, loader.server().port);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    server: ServerConfig,
    users: UsersConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/app")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if a
    /// required file is missing, contains invalid YAML, or lacks a
    /// required field.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let users = Self::load_yaml::<UsersConfig>(&path.join("users.yaml"))?;

        Ok(Self { server, users })
    }

    /// Returns the HTTP server configuration.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the accounts to seed into the store at startup.
    pub fn seed_users(&self) -> &[SeedUser] {
        &self.users.users
    }

    fn load_yaml<T: DeserializeOwned>(path: &Path) -> LedgerResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|err| LedgerError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
