//! Request and response shapes for each backend endpoint.
//!
//! The backend speaks JavaScript-style camelCase JSON with Mongo `_id`
//! identifiers; every struct here pins that wire shape explicitly instead of
//! spreading loose payload objects.

use medicart_core::models::{AdminProfile, CustomerProfile, Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Catalog listing filters (`GET /api/medicines`).
#[derive(Debug, Clone, Default)]
pub struct MedicineQuery {
    /// Free-text search; omitted when empty
    pub search: Option<String>,
    /// Category filter; omitted for "All"
    pub category: Option<String>,
}

/// New catalog entry (`POST /api/medicines`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicine {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub expiry: String,
    pub manufacturer: String,
    pub prescription_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Login credentials for either role.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /customer_login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerLoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
    pub customer: CustomerProfile,
}

/// `POST /admin_login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    #[serde(default)]
    pub user: Option<AdminProfile>,
}

/// `POST /customer_register` body.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// `POST /admin_register` body (also used to add staff members).
#[derive(Debug, Clone, Serialize)]
pub struct AdminRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial profile update (`PUT /api/admin/profile`, `/api/customer/profile`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `GET /api/customer/profile` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerProfileResponse {
    #[serde(default)]
    pub message: String,
    pub customer: CustomerProfile,
}

/// A staff roster entry (`GET /api/admins`).
#[derive(Debug, Clone, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
}

/// Partial order update (`PUT /api/orders/{id}`): `{status?, notes?}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderUpdate {
    /// Update only the status.
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            notes: None,
        }
    }

    /// Update only the notes.
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            status: None,
            notes: Some(notes.into()),
        }
    }
}

/// `GET /api/dashboard/stats` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_stock: u64,
    #[serde(default)]
    pub low_stock_count: u64,
    #[serde(default)]
    pub expired_count: u64,
    #[serde(default)]
    pub total_value: f64,
}

/// One entry of the dashboard activity feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(default)]
    pub icon_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub time: String,
}

/// A labelled chart value.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

/// One point of the weekly sales line.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesPoint {
    pub name: String,
    #[serde(default)]
    pub sales: f64,
}

/// `GET /api/analytics` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(default)]
    pub sales_data: Vec<SalesPoint>,
    #[serde(default)]
    pub order_status_data: Vec<NamedValue>,
    #[serde(default)]
    pub inventory_data: Vec<NamedValue>,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
