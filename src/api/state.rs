//! Application state for the shift ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::access::AccessGate;
use crate::store::Store;

/// Shared application state.
///
/// Holds the storage backend and the access gate; both are reference
/// counted so the state can be cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    gate: Arc<AccessGate>,
}

impl AppState {
    /// Creates application state around a storage backend.
    pub fn new(store: Arc<dyn Store>) -> Self {
        let gate = Arc::new(AccessGate::new(store.clone()));
        Self { store, gate }
    }

    /// Returns the storage backend.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Returns the access gate.
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }
}
