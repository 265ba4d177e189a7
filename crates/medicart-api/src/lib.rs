//! Typed REST client for the Medicart pharmacy backend.
//!
//! Covers the endpoints the storefront and admin screens consume: medicine
//! catalog CRUD, order submission and lifecycle updates, customer/admin
//! authentication, profile and staff-roster management, and the dashboard
//! and analytics aggregates.

pub mod client;
pub mod error;
pub mod types;

pub use client::*;
pub use error::*;
pub use types::*;
