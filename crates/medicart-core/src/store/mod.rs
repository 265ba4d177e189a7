//! Persisted key-value store for client-local state.
//!
//! The storefront keeps its client-owned state (cart, signed-in identity)
//! in a small key → serialized-JSON store. The [`KeyValueStore`] trait keeps
//! the substrate injectable: production uses [`SqliteStore`], tests use
//! [`MemoryStore`].

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Store key holding the cart line items (JSON array).
pub const CART_KEY: &str = "cart";

/// Store key holding the customer session (token + profile snippet).
pub const CUSTOMER_KEY: &str = "customer";

/// Store key holding the admin session.
pub const ADMIN_KEY: &str = "admin";

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A key → serialized-value store.
///
/// Every operation is synchronous; callers read-modify-write within a single
/// invocation, which is safe under the single-threaded execution model.
pub trait KeyValueStore {
    /// Get the raw value for a key, if present.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Set the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Remove every key.
    fn clear(&self) -> StoreResult<()>;

    /// Get and deserialize a JSON value.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a JSON value.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
