//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a ledger account
//! - `CreateAccountRequest`: Request body for opening an account
//! - `CreateAccountResponse`: Response body returned after opening an account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. The `updated_at` column is maintained by
/// the store and is not part of the public model.
///
/// # Balance Storage
///
/// Balances are stored as `i64` in the smallest currency unit. They default
/// to zero and are never mutated by transfer requests.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier assigned by the store on creation
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Pseudo-random account number (decimal string below 100000000)
    ///
    /// Uniqueness is not enforced; two accounts may share a number.
    pub number: String,

    /// Current balance in minor units
    pub balance: i64,

    /// Timestamp when account was created (assigned once by the store)
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace"
/// }
/// ```
///
/// Missing fields deserialize as empty strings. Names are stored as given.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Response body for `POST /account`.
///
/// Carries the freshly issued bearer token next to the created account.
#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    pub token: String,
    pub account: Account,
}
