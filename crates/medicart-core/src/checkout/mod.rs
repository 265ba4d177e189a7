//! Checkout assembly: totals, prescription gating, and the order payload.
//!
//! The payload mirrors the backend's multipart contract: line items travel
//! as one opaque serialized JSON blob next to scalar fields, with the
//! prescription image as an optional file part.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CartLineItem;

/// Validation errors detected before submission.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("One or more items require a prescription upload")]
    MissingPrescription,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// The backend label for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Parse a backend label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Credit Card" => Some(Self::CreditCard),
            "Cash on Delivery" => Some(Self::CashOnDelivery),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipping address fields from the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

impl std::fmt::Display for ShippingAddress {
    // Single-line form the backend stores: "street, city - zip"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} - {}", self.street, self.city, self.zip_code)
    }
}

/// An uploaded prescription image.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescriptionFile {
    pub file_name: String,
    /// MIME type, e.g. "image/png"
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fully assembled order submission, ready for the multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayload {
    /// Customer email
    pub customer: String,
    /// Line items serialized as the backend's JSON blob
    pub items_json: String,
    /// Total recomputed at assembly time
    pub total: f64,
    /// Single-line shipping address
    pub address: String,
    pub payment_method: PaymentMethod,
    pub prescription: Option<PrescriptionFile>,
}

/// Sum of price times quantity over all line items.
///
/// Recomputed fresh at submission time; never trusted from stale view state.
pub fn compute_total(items: &[CartLineItem]) -> f64 {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Whether any line item requires a prescription upload.
pub fn requires_prescription(items: &[CartLineItem]) -> bool {
    items.iter().any(|item| item.prescription_required)
}

/// Assemble an order payload, validating the prescription requirement.
///
/// Fails with [`ValidationError::MissingPrescription`] when the cart holds a
/// prescription-required item and no file is attached, and with
/// [`ValidationError::EmptyCart`] for an empty item list. On success the
/// caller submits the payload and, once the backend confirms, clears the
/// cart via [`crate::cart::Cart::clear`].
pub fn build_order_payload(
    customer_email: &str,
    items: &[CartLineItem],
    address: &ShippingAddress,
    payment_method: PaymentMethod,
    prescription: Option<PrescriptionFile>,
) -> ValidationResult<OrderPayload> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    if requires_prescription(items) && prescription.is_none() {
        return Err(ValidationError::MissingPrescription);
    }

    // Blob shape belongs to the backend contract; plain line structs always
    // serialize.
    let items_json = serde_json::to_string(items).unwrap_or_else(|_| "[]".into());

    Ok(OrderPayload {
        customer: customer_email.to_string(),
        items_json,
        total: compute_total(items),
        address: address.to_string(),
        payment_method,
        prescription,
    })
}
