//! Transfer HTTP handler.
//!
//! - POST /transfer - Validate a transfer request and echo it back

use crate::{
    error::AppError,
    models::{token::TokenClaims, transfer::TransferRequest},
    services::transfer_service,
};
use axum::{Extension, Json, body::Bytes};

/// Accept a transfer request.
///
/// # Endpoint
///
/// `POST /transfer`
///
/// # Authentication
///
/// Runs behind `auth_middleware`; `claims` are whatever the presented token
/// carried. They are not matched against `account_number`.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "48213377",
///   "amount": 2500,
///   "remarks": "Rent"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The request, unchanged
/// - **Error (400)**: Malformed body or amount below 100
/// - **Error (401)**: Missing or invalid token (returned by the middleware)
pub async fn create_transfer(
    Extension(claims): Extension<TokenClaims>,
    body: Bytes,
) -> Result<Json<TransferRequest>, AppError> {
    // Content-Type is not checked, only the body
    let request: TransferRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "unparseable transfer body");
        AppError::InvalidRequest("Error parsing request".to_string())
    })?;

    let transfer = transfer_service::validate_transfer(request)?;
    tracing::debug!(
        requested_by = claims.id,
        account_number = %transfer.account_number,
        amount = transfer.amount,
        "transfer request accepted"
    );

    Ok(Json(transfer))
}
