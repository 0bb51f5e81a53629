//! Access control for the shift ledger.
//!
//! The gate owns two checks: resolving a request credential to a user
//! identity, and verifying that a user is linked to a restaurant before
//! anything is written against it. Login mints an opaque bearer token;
//! there is no expiry or refresh machinery.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::store::Store;

/// Resolves credentials and restaurant membership.
pub struct AccessGate {
    store: Arc<dyn Store>,
    tokens: RwLock<HashMap<Uuid, i64>>,
}

impl AccessGate {
    /// Creates a gate backed by the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Mints a bearer token for a freshly authenticated user.
    pub fn issue(&self, user_id: i64) -> Uuid {
        let token = Uuid::new_v4();
        let mut tokens = self.tokens.write().expect("token lock poisoned");
        tokens.insert(token, user_id);
        token
    }

    /// Resolves the request's `Authorization: Bearer` header to a user id.
    ///
    /// Any missing, malformed, or unknown credential yields
    /// [`LedgerError::Unauthenticated`]; callers cannot distinguish the
    /// cases.
    pub fn resolve(&self, headers: &HeaderMap) -> LedgerResult<i64> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(LedgerError::Unauthenticated)?;

        let token = header
            .strip_prefix("Bearer ")
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .ok_or(LedgerError::Unauthenticated)?;

        let tokens = self.tokens.read().expect("token lock poisoned");
        tokens
            .get(&token)
            .copied()
            .ok_or(LedgerError::Unauthenticated)
    }

    /// Verifies that the user is linked to the restaurant.
    pub fn authorize(&self, user_id: i64, restaurant_id: i64) -> LedgerResult<()> {
        if self.store.user_has_restaurant(user_id, restaurant_id) {
            Ok(())
        } else {
            Err(LedgerError::AccessDenied {
                user_id,
                restaurant_id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use crate::store::MemoryStore;

    fn gate_with_store() -> (AccessGate, Arc<dyn Store>) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::default());
        (AccessGate::new(store.clone()), store)
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_issue_then_resolve() {
        let (gate, store) = gate_with_store();
        let user = store.insert_user("ana@example.com", "Ana", "$2b$hash");

        let token = gate.issue(user.id);
        let resolved = gate.resolve(&bearer_headers(&token.to_string())).unwrap();
        assert_eq!(resolved, user.id);
    }

    #[test]
    fn test_resolve_without_header_fails() {
        let (gate, _store) = gate_with_store();
        let result = gate.resolve(&HeaderMap::new());
        assert!(matches!(result, Err(LedgerError::Unauthenticated)));
    }

    #[test]
    fn test_resolve_rejects_unknown_token() {
        let (gate, _store) = gate_with_store();
        let result = gate.resolve(&bearer_headers(&Uuid::new_v4().to_string()));
        assert!(matches!(result, Err(LedgerError::Unauthenticated)));
    }

    #[test]
    fn test_resolve_rejects_malformed_token() {
        let (gate, _store) = gate_with_store();
        let result = gate.resolve(&bearer_headers("not-a-uuid"));
        assert!(matches!(result, Err(LedgerError::Unauthenticated)));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            gate.resolve(&headers),
            Err(LedgerError::Unauthenticated)
        ));
    }

    #[test]
    fn test_authorize_checks_restaurant_link() {
        let (gate, store) = gate_with_store();
        let owner = store.insert_user("ana@example.com", "Ana", "$2b$hash");
        let other = store.insert_user("ben@example.com", "Ben", "$2b$hash");
        let restaurant = store.create_restaurant("Lucia's", owner.id);

        assert!(gate.authorize(owner.id, restaurant.id).is_ok());
        assert!(matches!(
            gate.authorize(other.id, restaurant.id),
            Err(LedgerError::AccessDenied { .. })
        ));
    }
}
