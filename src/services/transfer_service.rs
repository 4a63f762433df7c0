//! Transfer request validation.
//!
//! Transfers are checked and handed back untouched. Nothing here looks up
//! accounts or changes a balance.

use crate::{error::AppError, models::transfer::TransferRequest};

/// Smallest amount a transfer may carry.
pub const MIN_TRANSFER_AMOUNT: i64 = 100;

/// Validate a transfer request.
///
/// # Errors
///
/// - `InvalidRequest`: amount is below `MIN_TRANSFER_AMOUNT`
pub fn validate_transfer(request: TransferRequest) -> Result<TransferRequest, AppError> {
    if request.amount < MIN_TRANSFER_AMOUNT {
        return Err(AppError::InvalidRequest(format!(
            "Amount cannot be less than {MIN_TRANSFER_AMOUNT}"
        )));
    }

    Ok(request)
}
