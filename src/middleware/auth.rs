//! Bearer token authentication middleware.
//!
//! This middleware wraps every protected route to:
//! 1. Extract the token from the Authorization header
//! 2. Verify its signature, algorithm and not-before claim
//! 3. Inject the verified claims into the request
//! 4. Reject unverifiable requests with HTTP 401

use crate::{app::AppState, error::AppError};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Token authentication middleware function.
///
/// # Flow
///
/// 1. Read the `Authorization` header (raw token or `Bearer <token>`)
/// 2. Verify it with the application's `AuthGate`
/// 3. If valid: log the claims, insert them into request extensions, call next handler
/// 4. If not: return 401 without running the wrapped handler
///
/// The claims are not compared with the resource the request acts on; any
/// valid token passes.
///
/// # Returns
///
/// - `Ok(Response)` from the wrapped handler when the token verifies
/// - `Err(AppError::MissingToken)` when the header is absent
/// - `Err(AppError::InvalidToken)` when verification fails
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::MissingToken)?
        .to_str()
        .map_err(|_| AppError::InvalidToken)?;

    let token = bearer_token(auth_header);

    if token.is_empty() {
        return Err(AppError::MissingToken);
    }

    let claims = state.auth.verify(token).map_err(|err| {
        tracing::warn!(error = %err, "rejected bearer token");
        AppError::InvalidToken
    })?;

    tracing::info!(
        account_id = claims.id,
        account_number = %claims.account_number,
        "bearer token verified"
    );

    // Handlers can read these with Extension<TokenClaims>
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Token part of an `Authorization` value.
///
/// The `Bearer` scheme is matched case-insensitively. A value without a
/// scheme is taken as the raw token.
fn bearer_token(header_value: &str) -> &str {
    let header_value = header_value.trim();
    match header_value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => header_value,
    }
}
