//! Transfer request model.
//!
//! Transfers are validated and echoed back; no balance is moved.

use serde::{Deserialize, Serialize};

/// Request to transfer funds to an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_number": "81234567",
///   "amount": 2500,
///   "remarks": "Rent"
/// }
/// ```
///
/// Missing fields deserialize to empty strings and zero, so an empty body
/// fails amount validation rather than parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferRequest {
    /// Destination account number
    pub account_number: String,

    /// Amount in minor units
    pub amount: i64,

    /// Free-form note from the sender
    pub remarks: String,
}
