//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List accounts
//! - POST /account - Open a new account and issue its bearer token
//! - GET /account/{id} - Get account by ID
//! - DELETE /account/{id} - Delete account by ID

use crate::{
    app::AppState,
    error::AppError,
    models::account::{Account, CreateAccountRequest, CreateAccountResponse},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

/// Maximum number of accounts returned by `GET /account`.
pub const LIST_ACCOUNTS_LIMIT: usize = 200;

/// Parse the `{id}` path segment.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidRequest("Id is not a valid number".to_string()))
}

/// List accounts.
///
/// # Endpoint
///
/// `GET /account`
///
/// # Response
///
/// - **Success (200 OK)**: Array of up to 200 accounts (may be empty)
/// - **Error (400)**: Store failure
///
/// Ordering is whatever the store returns.
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.get_accounts(LIST_ACCOUNTS_LIMIT).await?;

    Ok(Json(accounts))
}

/// Open a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The bearer token for the account and the account itself
/// - **Error (400)**: Malformed body or store failure
/// - **Error (500)**: Token signing failed (the account is already stored)
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "account": {
///     "id": 1,
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "number": "48213377",
///     "balance": 0,
///     "created_at": "2025-12-20T10:00:00Z"
///   }
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateAccountResponse>, AppError> {
    let request: CreateAccountRequest = serde_json::from_slice(&body)
        .map_err(|err| AppError::InvalidRequest(format!("Error parsing json: {err}")))?;

    let account = state.store.create_account(request).await?;
    tracing::info!(account_id = account.id, "account created");

    let token = state.auth.issue(&account).map_err(AppError::TokenIssue)?;

    Ok(Json(CreateAccountResponse { token, account }))
}

/// Get a specific account by ID.
///
/// # Endpoint
///
/// `GET /account/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: Account details
/// - **Error (400)**: Non-numeric id, unknown id, or store failure
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, AppError> {
    let id = parse_id(&id)?;

    let account = state.store.get_account_by_id(id).await?;

    Ok(Json(account))
}

/// Delete an account.
///
/// # Endpoint
///
/// `DELETE /account/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `"Record Deleted"`, also when the id never existed
/// - **Error (400)**: Non-numeric id or store failure
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>, AppError> {
    let id = parse_id(&id)?;

    state.store.delete_account(id).await?;
    tracing::info!(account_id = id, "account deleted");

    Ok(Json("Record Deleted"))
}
