//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur while serving a
/// request. Each variant maps to a specific HTTP status code and message.
///
/// # Error Categories
///
/// - **Validation Errors**: Malformed bodies, non-numeric ids, amounts below minimum
/// - **Resource Errors**: Requested account does not exist
/// - **Storage Errors**: Any failure reported by the account store
/// - **Authentication Errors**: Missing or unverifiable bearer token
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Record not found for the given id: {0}")]
    AccountNotFound(i32),

    /// Account store operation failed.
    ///
    /// Returns HTTP 400 Bad Request with the store's message.
    #[error(transparent)]
    Store(StoreError),

    /// `Authorization` header is absent.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Authorization token missing")]
    MissingToken,

    /// Token could not be verified (bad signature, wrong algorithm, not yet valid).
    ///
    /// Returns HTTP 401 Unauthorized. The cause is logged, never returned.
    #[error("Error validating request")]
    InvalidToken,

    /// Signing a freshly created account's token failed.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Error generating token")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),
}

/// Lift store errors, turning a missing row into `AccountNotFound`.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::AccountNotFound(id),
            other => AppError::Store(other),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingToken`, `InvalidToken` → 401 Unauthorized
/// - `TokenIssue` → 500 Internal Server Error
/// - everything else → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::TokenIssue(ref err) => {
                tracing::error!(error = %err, "failed to sign account token");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Store(ref err) => {
                tracing::error!(error = %err, "account store failure");
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidRequest(_) | AppError::AccountNotFound(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
