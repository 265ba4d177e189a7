//! Order models and the status enumeration.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CartLineItem;

/// Order lifecycle status, strictly ordered for progress display.
///
/// This enum is the single source of truth for status ordering and display
/// rules; views must not compare raw status strings themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order received, not yet picked
    Pending,
    /// Being packed by the pharmacy
    Processing,
    /// Handed to a delivery partner
    OutForDelivery,
    /// Delivered to the customer
    Delivered,
    /// Cancelled; terminal, no further transitions
    Cancelled,
}

impl OrderStatus {
    /// Parse a backend status string.
    ///
    /// Unrecognized input maps to `Pending` rather than failing: the status
    /// originates from a trusted backend, and the tracking display stays
    /// available even if a new status value ships server-side first.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Processing" => Self::Processing,
            "Out for Delivery" => Self::OutForDelivery,
            "Delivered" => Self::Delivered,
            "Cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }

    /// The exact backend string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether the customer may still cancel an order in this status.
    ///
    /// Cancellation is reachable only from `Pending` and `Processing`.
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an admin status update from `self` to `next` is legal.
    ///
    /// Transitions are monotonic along the enumeration order; cancellation
    /// is allowed only while `can_cancel` holds, and nothing follows a
    /// terminal status.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if *self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        match next {
            OrderStatus::Cancelled => self.can_cancel(),
            _ => rank(next) > rank(*self),
        }
    }
}

/// Position along the delivery track; `Cancelled` sits outside it.
fn rank(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 0,
        OrderStatus::Processing => 1,
        OrderStatus::OutForDelivery => 2,
        OrderStatus::Delivered => 3,
        OrderStatus::Cancelled => u8::MAX,
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

/// A customer order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Customer email
    pub customer: String,
    /// Ordered line items
    #[serde(default)]
    pub items: Vec<CartLineItem>,
    /// Order total as computed at submission time
    pub total: f64,
    /// Current lifecycle status
    #[serde(default = "default_status")]
    pub status: OrderStatus,
    /// Free-text admin notes
    #[serde(default)]
    pub notes: String,
    /// Shipping address line
    #[serde(default)]
    pub address: String,
    /// Payment method label
    #[serde(default)]
    pub payment_method: String,
    /// Stored prescription file reference, if one was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
    /// Creation timestamp, RFC 3339
    #[serde(default)]
    pub created_at: String,
}

fn default_status() -> OrderStatus {
    OrderStatus::Pending
}

impl Order {
    /// Creation time as a unix timestamp; unparsable timestamps sort first.
    fn created_timestamp(&self) -> i64 {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.timestamp())
            .unwrap_or(i64::MIN)
    }

    /// Short display form of the order id (last six characters).
    pub fn short_id(&self) -> &str {
        let split = self.id.len().saturating_sub(6);
        &self.id[split..]
    }
}

/// The most recently placed order, by creation timestamp.
///
/// The tracking view shows the newest order for the signed-in customer.
pub fn latest_order(orders: &[Order]) -> Option<&Order> {
    orders.iter().max_by_key(|order| order.created_timestamp())
}
