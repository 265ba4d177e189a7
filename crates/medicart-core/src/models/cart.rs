//! Cart line item model.

use serde::{Deserialize, Serialize};

use super::Medicine;

/// One catalog product plus a quantity inside the cart.
///
/// At most one line exists per catalog id; adding the same id again merges
/// by summing quantities (see [`crate::cart::Cart`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Catalog id of the underlying medicine
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price at the time the item was added
    pub price: f64,
    /// Manufacturer name
    #[serde(default)]
    pub manufacturer: String,
    /// Whether this line forces a prescription upload at checkout
    #[serde(default)]
    pub prescription_required: bool,
    /// Quantity, always >= 1
    pub quantity: u32,
}

impl CartLineItem {
    /// Build a line item from a catalog medicine and a quantity.
    pub fn from_medicine(medicine: &Medicine, quantity: u32) -> Self {
        Self {
            id: medicine.id.clone(),
            name: medicine.name.clone(),
            price: medicine.price,
            manufacturer: medicine.manufacturer.clone(),
            prescription_required: medicine.prescription_required,
            quantity,
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
