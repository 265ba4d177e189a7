//! Signed-in identity persistence.
//!
//! Stores the customer and admin sessions (opaque token plus profile
//! snippet) under their well-known keys, mirroring how the web shell keeps
//! them in browser storage.

use crate::models::{AdminSession, CustomerSession};
use crate::store::{KeyValueStore, StoreResult, ADMIN_KEY, CUSTOMER_KEY};

/// Session manager over an injected store.
pub struct Sessions<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> Sessions<'a, S> {
    /// Create a session manager over the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist the customer session after a successful login.
    pub fn save_customer(&self, session: &CustomerSession) -> StoreResult<()> {
        self.store.set_json(CUSTOMER_KEY, session)
    }

    /// The signed-in customer, if any.
    ///
    /// A corrupt stored blob reads as signed out.
    pub fn customer(&self) -> StoreResult<Option<CustomerSession>> {
        let raw = self.store.get(CUSTOMER_KEY)?;
        Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
    }

    /// Persist the admin session.
    pub fn save_admin(&self, session: &AdminSession) -> StoreResult<()> {
        self.store.set_json(ADMIN_KEY, session)
    }

    /// The signed-in admin, if any.
    pub fn admin(&self) -> StoreResult<Option<AdminSession>> {
        let raw = self.store.get(ADMIN_KEY)?;
        Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
    }

    /// Sign the customer out.
    pub fn sign_out_customer(&self) -> StoreResult<()> {
        self.store.remove(CUSTOMER_KEY)
    }

    /// Sign the admin out.
    pub fn sign_out_admin(&self) -> StoreResult<()> {
        self.store.remove(ADMIN_KEY)
    }

    /// Sign everybody out (the shell's logout-all menu action).
    pub fn sign_out(&self) -> StoreResult<()> {
        self.sign_out_customer()?;
        self.sign_out_admin()
    }
}
