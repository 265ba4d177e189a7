//! Medicart Core Library
//!
//! Client-side state core for the Medicart pharmacy storefront. The host UI
//! shell renders screens; this crate owns the cart, checkout assembly,
//! signed-in identity, and the order status projection behind them.
//!
//! # Architecture
//!
//! ```text
//! Catalog fetch ──► Shop / Product screens
//!                         │ add to cart
//!                         ▼
//!               ┌───────────────────┐
//!               │   Persisted Cart  │  key "cart" in the local store
//!               │ add / qty / remove│
//!               └─────────┬─────────┘
//!                         │ checkout
//!                         ▼
//!               ┌───────────────────┐     prescription gate
//!               │ Checkout Assembly │──► ValidationError or
//!               │ total + payload   │     multipart OrderPayload
//!               └─────────┬─────────┘
//!                         │ submit (backend confirms) → cart.clear()
//!                         ▼
//!               ┌───────────────────┐
//!               │  Status Projector │  status → step track,
//!               │  courier + ETA    │  hash-keyed courier pool
//!               └───────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: injectable key → serialized-JSON store (SQLite or in-memory)
//! - [`models`]: domain types (Medicine, CartLineItem, Order, sessions)
//! - [`cart`]: persisted cart mutation operations
//! - [`checkout`]: totals, prescription gating, order payload assembly
//! - [`tracking`]: order status projection and courier assignment
//! - [`session`]: signed-in identity persistence
//! - [`inventory`]: admin-side filter/sort/summary helpers

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod models;
pub mod session;
pub mod store;
pub mod tracking;

// Re-export commonly used types
pub use cart::Cart;
pub use checkout::{
    build_order_payload, compute_total, requires_prescription, OrderPayload, PaymentMethod,
    PrescriptionFile, ShippingAddress, ValidationError,
};
pub use models::{
    AdminProfile, AdminSession, CartLineItem, CustomerProfile, CustomerSession, Medicine, Order,
    OrderStatus,
};
pub use session::Sessions;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use tracking::{assign_courier, step_index, step_states, Courier, StepState, DELIVERY_STEPS};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedicartError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<store::StoreError> for MedicartError {
    fn from(e: store::StoreError) -> Self {
        MedicartError::StorageError(e.to_string())
    }
}

impl From<checkout::ValidationError> for MedicartError {
    fn from(e: checkout::ValidationError) -> Self {
        MedicartError::ValidationError(e.to_string())
    }
}

impl From<serde_json::Error> for MedicartError {
    fn from(e: serde_json::Error) -> Self {
        MedicartError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for MedicartError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedicartError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the local store at the given path.
#[uniffi::export]
pub fn open_store(path: String) -> Result<Arc<MedicartCore>, MedicartError> {
    let store = SqliteStore::open(&path)?;
    Ok(Arc::new(MedicartCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

/// Create an in-memory store (for testing and previews).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<MedicartCore>, MedicartError> {
    let store = SqliteStore::open_in_memory()?;
    Ok(Arc::new(MedicartCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MedicartCore {
    store: Arc<Mutex<SqliteStore>>,
}

#[uniffi::export]
impl MedicartCore {
    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add a line to the cart, merging with an existing line of the same id.
    pub fn add_to_cart(&self, line: FfiCartLine) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        cart.add_line(line.into())?;
        Ok(())
    }

    /// Current cart contents.
    pub fn cart_items(&self) -> Result<Vec<FfiCartLine>, MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        let items = cart.items()?;
        Ok(items.into_iter().map(|item| item.into()).collect())
    }

    /// Replace the quantity of a cart line. Quantities below 1 are ignored.
    pub fn set_cart_quantity(&self, id: String, quantity: u32) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        cart.set_quantity(&id, quantity)?;
        Ok(())
    }

    /// Remove a cart line.
    pub fn remove_from_cart(&self, id: String) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        cart.remove_item(&id)?;
        Ok(())
    }

    /// Empty the cart (after a confirmed order submission).
    pub fn clear_cart(&self) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        cart.clear()?;
        Ok(())
    }

    /// Current cart total.
    pub fn cart_total(&self) -> Result<f64, MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        Ok(compute_total(&cart.items()?))
    }

    /// Whether checkout will demand a prescription upload.
    pub fn cart_requires_prescription(&self) -> Result<bool, MedicartError> {
        let store = self.store.lock()?;
        let cart = Cart::new(&*store);
        Ok(requires_prescription(&cart.items()?))
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Assemble the order payload for the signed-in customer.
    ///
    /// Validates the prescription requirement against the current cart. The
    /// shell submits the returned payload and calls [`Self::clear_cart`]
    /// once the backend confirms.
    pub fn build_checkout(
        &self,
        address: FfiShippingAddress,
        payment_method: String,
        prescription: Option<FfiPrescriptionFile>,
    ) -> Result<FfiOrderPayload, MedicartError> {
        let store = self.store.lock()?;

        let customer = Sessions::new(&*store)
            .customer()?
            .ok_or_else(|| MedicartError::SessionError("No customer is signed in".into()))?;

        let method = PaymentMethod::parse(&payment_method).ok_or_else(|| {
            MedicartError::ValidationError(format!("Unknown payment method: {payment_method}"))
        })?;

        let items = Cart::new(&*store).items()?;
        let payload = build_order_payload(
            &customer.customer.email,
            &items,
            &address.into(),
            method,
            prescription.map(|file| file.into()),
        )?;

        Ok(payload.into())
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Persist the customer session after login.
    pub fn save_customer_session(&self, session: FfiCustomerSession) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        Sessions::new(&*store).save_customer(&session.into())?;
        Ok(())
    }

    /// The signed-in customer, if any.
    pub fn current_customer(&self) -> Result<Option<FfiCustomerSession>, MedicartError> {
        let store = self.store.lock()?;
        let session = Sessions::new(&*store).customer()?;
        Ok(session.map(|s| s.into()))
    }

    /// Persist the admin session after login.
    pub fn save_admin_session(&self, session: FfiAdminSession) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        Sessions::new(&*store).save_admin(&session.into())?;
        Ok(())
    }

    /// The signed-in admin, if any.
    pub fn current_admin(&self) -> Result<Option<FfiAdminSession>, MedicartError> {
        let store = self.store.lock()?;
        let session = Sessions::new(&*store).admin()?;
        Ok(session.map(|s| s.into()))
    }

    /// Sign everybody out.
    pub fn sign_out(&self) -> Result<(), MedicartError> {
        let store = self.store.lock()?;
        Sessions::new(&*store).sign_out()?;
        Ok(())
    }
}

// =========================================================================
// Tracking Functions (exported to FFI)
// =========================================================================

/// Ordered step labels of the delivery track.
#[uniffi::export]
pub fn delivery_steps() -> Vec<String> {
    DELIVERY_STEPS.iter().map(|s| s.to_string()).collect()
}

/// Zero-based track index for a backend status string.
///
/// `None` for "Cancelled"; unknown strings project to 0.
#[uniffi::export]
pub fn delivery_step_index(status: String) -> Option<u32> {
    step_index(OrderStatus::parse_lenient(&status)).map(|index| index as u32)
}

/// Whether the customer may still cancel an order in this status.
#[uniffi::export]
pub fn order_can_cancel(status: String) -> bool {
    OrderStatus::parse_lenient(&status).can_cancel()
}

/// Courier profile for an order, stable per order id.
#[uniffi::export]
pub fn courier_for_order(order_id: String) -> FfiCourier {
    assign_courier(&order_id).into()
}

/// Display-only delivery estimate in days (1-10), stable per order id.
#[uniffi::export]
pub fn delivery_estimate_days(order_id: String) -> u8 {
    tracking::estimated_delivery_days(&order_id)
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe cart line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub manufacturer: String,
    pub prescription_required: bool,
    pub quantity: u32,
}

impl From<CartLineItem> for FfiCartLine {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            manufacturer: item.manufacturer,
            prescription_required: item.prescription_required,
            quantity: item.quantity,
        }
    }
}

impl From<FfiCartLine> for CartLineItem {
    fn from(line: FfiCartLine) -> Self {
        CartLineItem {
            id: line.id,
            name: line.name,
            price: line.price,
            manufacturer: line.manufacturer,
            prescription_required: line.prescription_required,
            quantity: line.quantity,
        }
    }
}

/// FFI-safe shipping address.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShippingAddress {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

impl From<FfiShippingAddress> for ShippingAddress {
    fn from(address: FfiShippingAddress) -> Self {
        ShippingAddress {
            street: address.street,
            city: address.city,
            zip_code: address.zip_code,
        }
    }
}

/// FFI-safe prescription upload.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescriptionFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl From<FfiPrescriptionFile> for PrescriptionFile {
    fn from(file: FfiPrescriptionFile) -> Self {
        PrescriptionFile {
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        }
    }
}

impl From<PrescriptionFile> for FfiPrescriptionFile {
    fn from(file: PrescriptionFile) -> Self {
        Self {
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        }
    }
}

/// FFI-safe assembled order payload.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOrderPayload {
    pub customer: String,
    pub items_json: String,
    pub total: f64,
    pub address: String,
    pub payment_method: String,
    pub prescription: Option<FfiPrescriptionFile>,
}

impl From<OrderPayload> for FfiOrderPayload {
    fn from(payload: OrderPayload) -> Self {
        Self {
            customer: payload.customer,
            items_json: payload.items_json,
            total: payload.total,
            address: payload.address,
            payment_method: payload.payment_method.as_str().to_string(),
            prescription: payload.prescription.map(|file| file.into()),
        }
    }
}

/// FFI-safe courier profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCourier {
    pub name: String,
    pub phone: String,
    pub vehicle: String,
}

impl From<&Courier> for FfiCourier {
    fn from(courier: &Courier) -> Self {
        Self {
            name: courier.name.to_string(),
            phone: courier.phone.to_string(),
            vehicle: courier.vehicle.to_string(),
        }
    }
}

/// FFI-safe customer session.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCustomerSession {
    pub token: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<CustomerSession> for FfiCustomerSession {
    fn from(session: CustomerSession) -> Self {
        Self {
            token: session.token,
            name: session.customer.name,
            email: session.customer.email,
            phone: session.customer.phone,
        }
    }
}

impl From<FfiCustomerSession> for CustomerSession {
    fn from(session: FfiCustomerSession) -> Self {
        CustomerSession {
            token: session.token,
            customer: CustomerProfile {
                name: session.name,
                email: session.email,
                phone: session.phone,
            },
        }
    }
}

/// FFI-safe admin session.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdminSession {
    pub token: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl From<AdminSession> for FfiAdminSession {
    fn from(session: AdminSession) -> Self {
        Self {
            token: session.token,
            name: session.admin.name,
            email: session.admin.email,
            phone: session.admin.phone,
            role: session.admin.role,
        }
    }
}

impl From<FfiAdminSession> for AdminSession {
    fn from(session: FfiAdminSession) -> Self {
        AdminSession {
            token: session.token,
            admin: AdminProfile {
                name: session.name,
                email: session.email,
                phone: session.phone,
                role: session.role,
            },
        }
    }
}
