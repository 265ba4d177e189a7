//! Deterministic courier assignment for the tracking view.
//!
//! The backend does not expose courier data; the tracking view shows a
//! courier picked from a fixed pool, keyed by order id so repeated renders
//! agree. Display-only placeholder data, not a delivery guarantee.

use sha2::{Digest, Sha256};

/// A delivery partner profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Courier {
    pub name: &'static str,
    pub phone: &'static str,
    pub vehicle: &'static str,
}

/// Fixed pool of courier profiles.
pub static COURIER_POOL: [Courier; 5] = [
    Courier {
        name: "Rohan Kumar",
        phone: "98765 12345",
        vehicle: "Bike - HP12 AB 4455",
    },
    Courier {
        name: "Amit Singh",
        phone: "98765 67890",
        vehicle: "Scooter - DL3C 1234",
    },
    Courier {
        name: "Vikram Malhotra",
        phone: "91234 56789",
        vehicle: "Bike - UP16 Z 9988",
    },
    Courier {
        name: "Suresh Raina",
        phone: "99887 77665",
        vehicle: "Bike - MH12 X 1122",
    },
    Courier {
        name: "Rahul Dravid",
        phone: "98123 45678",
        vehicle: "Scooter - KA01 Y 3344",
    },
];

/// Pick the courier for an order.
///
/// Pure function of the order id: SHA-256 of the id, first eight bytes as a
/// big-endian integer, modulo the pool size. The same id always yields the
/// same courier.
pub fn assign_courier(order_id: &str) -> &'static Courier {
    let index = (hash_prefix(order_id, 0) % COURIER_POOL.len() as u64) as usize;
    &COURIER_POOL[index]
}

/// Estimated delivery window in days, in 1..=10.
///
/// Derived from the same order-id hash so the estimate is stable across
/// renders. Cosmetic placeholder; the backend makes no such promise.
pub fn estimated_delivery_days(order_id: &str) -> u8 {
    (hash_prefix(order_id, 8) % 10 + 1) as u8
}

/// Eight bytes of the order-id digest starting at `offset`, as a u64.
fn hash_prefix(order_id: &str, offset: usize) -> u64 {
    let digest = Sha256::digest(order_id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}
