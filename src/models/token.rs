//! Bearer token claims.

use serde::{Deserialize, Serialize};

/// Claims carried by the token issued on account creation.
///
/// There is no `exp` claim, so a token stays valid forever once `nbf` has
/// passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// ID of the account the token was issued for
    pub id: i32,

    /// Number of the account the token was issued for
    pub account_number: String,

    /// Not-before instant (unix seconds)
    pub nbf: i64,
}
