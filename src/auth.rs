//! Bearer-token storage for the dashboard API
//!
//! The backend mints a JWT on `/login`; the browser keeps it in local
//! storage and replays it on every request. On non-wasm targets the store
//! degrades to an in-memory cell so the client stays exercisable in unit
//! tests.

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

use crate::error::Result;

#[cfg(target_arch = "wasm32")]
use crate::error::DashboardError;

/// Token store keyed into browser local storage
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    key: String,
    #[cfg(not(target_arch = "wasm32"))]
    cell: RefCell<Option<String>>,
}

impl TokenStore {
    /// Create a store reading/writing the given storage key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            #[cfg(not(target_arch = "wasm32"))]
            cell: RefCell::new(None),
        }
    }

    /// Storage key this store is bound to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current bearer token, if any
    ///
    /// Absence of a token is not an error: requests simply go out without
    /// an `Authorization` header.
    #[cfg(target_arch = "wasm32")]
    pub fn bearer_token(&self) -> Option<String> {
        let storage = local_storage().ok()?;
        storage.get_item(&self.key).ok().flatten()
    }

    /// Current bearer token, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn bearer_token(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    /// Persist a fresh token (e.g. after `/login`)
    #[cfg(target_arch = "wasm32")]
    pub fn store(&self, token: &str) -> Result<()> {
        let storage = local_storage()?;
        storage
            .set_item(&self.key, token)
            .map_err(|_| DashboardError::Storage(format!("failed to write '{}'", self.key)))
    }

    /// Persist a fresh token (e.g. after `/login`)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn store(&self, token: &str) -> Result<()> {
        *self.cell.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    /// Drop the stored token (logout)
    #[cfg(target_arch = "wasm32")]
    pub fn clear(&self) -> Result<()> {
        let storage = local_storage()?;
        storage
            .remove_item(&self.key)
            .map_err(|_| DashboardError::Storage(format!("failed to remove '{}'", self.key)))
    }

    /// Drop the stored token (logout)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear(&self) -> Result<()> {
        *self.cell.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| DashboardError::Storage("no window object".into()))?;
    window
        .local_storage()
        .map_err(|_| DashboardError::Storage("local storage access denied".into()))?
        .ok_or_else(|| DashboardError::Storage("local storage unavailable".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let store = TokenStore::new("access_token");
        assert!(store.bearer_token().is_none());

        store.store("eyJ.fake.jwt").expect("store token");
        assert_eq!(store.bearer_token().as_deref(), Some("eyJ.fake.jwt"));

        store.clear().expect("clear token");
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn test_store_overwrites() {
        let store = TokenStore::new("access_token");
        store.store("first").expect("store token");
        store.store("second").expect("store token");
        assert_eq!(store.bearer_token().as_deref(), Some("second"));
    }
}
