//! Customer and admin account models.

use serde::{Deserialize, Serialize};

/// Customer profile snippet as stored alongside the session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Admin profile snippet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Role label, e.g. "admin" or "staff"
    #[serde(default)]
    pub role: String,
}

/// A signed-in customer: opaque backend token plus profile snippet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSession {
    pub token: String,
    pub customer: CustomerProfile,
}

/// A signed-in admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub admin: AdminProfile,
}
