//! Medicine catalog models.
//!
//! The wire shape (field names, `_id`) is owned by the backend, which speaks
//! JavaScript-style camelCase JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock level below which an item counts as low stock on the dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Date format used by the inventory forms for expiry dates.
const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// A single medicine in the pharmacy catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label (e.g. "Pain Relief", "Antibiotic")
    pub category: String,
    /// Unit price in currency units
    pub price: f64,
    /// Stock on hand
    pub quantity: u32,
    /// Expiry date, `YYYY-MM-DD`
    pub expiry: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Whether ordering this item requires a prescription upload
    #[serde(default)]
    pub prescription_required: bool,
    /// Optional product image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Medicine {
    /// Create a medicine with required fields.
    pub fn new(id: String, name: String, category: String, price: f64) -> Self {
        Self {
            id,
            name,
            category,
            price,
            quantity: 0,
            expiry: String::new(),
            manufacturer: String::new(),
            prescription_required: false,
            image: None,
        }
    }

    /// Whether any stock remains.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Whether stock has fallen below the dashboard alert threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Whether the expiry date lies strictly before `today`.
    ///
    /// An unparsable expiry string is treated as not expired, so one bad
    /// record cannot poison the dashboard counts.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        match NaiveDate::parse_from_str(&self.expiry, EXPIRY_FORMAT) {
            Ok(expiry) => expiry < today,
            Err(_) => false,
        }
    }

    /// Stock value of this item (price times quantity on hand).
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
