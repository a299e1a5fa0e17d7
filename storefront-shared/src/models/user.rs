//! Accounts and their roles.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Timestamp;

/// The two account roles the storefront API knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Store operator; may open the admin area.
    Admin,
    /// Regular shopper.
    Customer,
}

impl UserRole {
    /// Return the wire representation of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "CUSTOMER" => Ok(Self::Customer),
            _ => Err("unknown user role"),
        }
    }
}

/// An authenticated account as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-side identifier.
    pub id: i64,

    /// Login email address.
    pub email: String,

    /// Account role.
    pub role: UserRole,

    /// When the account was created, if the server sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl User {
    /// Whether this account may open the admin area.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Navbar label, `email (ROLE)`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} ({})", self.email, self.role)
    }
}
