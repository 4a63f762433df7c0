//! Account opening logic shared by every store backend.

use rand::Rng;

use crate::models::account::CreateAccountRequest;

/// Account numbers are drawn uniformly from `0..ACCOUNT_NUMBER_UPPER_BOUND`.
pub const ACCOUNT_NUMBER_UPPER_BOUND: u32 = 100_000_000;

/// Row contents for an account that has not been persisted yet.
///
/// The store fills in `id` and `created_at` when inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    pub balance: i64,
}

impl NewAccount {
    /// Build the row for a new account.
    ///
    /// Names are taken as given, empty ones included. The number is not
    /// checked against existing accounts.
    pub fn from_request(req: CreateAccountRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            number: generate_account_number(),
            balance: 0,
        }
    }
}

/// Non-cryptographic pseudo-random account number as a decimal string.
pub fn generate_account_number() -> String {
    rand::rng()
        .random_range(0..ACCOUNT_NUMBER_UPPER_BOUND)
        .to_string()
}
