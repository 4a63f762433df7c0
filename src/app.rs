//! Shared application state and router assembly.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, services::token_service::AuthGate, store::AccountStore};

/// State shared with every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub auth: Arc<AuthGate>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, auth: AuthGate) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
        }
    }
}

/// Build the HTTP router.
///
/// Account routes are public. `/transfer` sits behind the bearer token
/// middleware, which short-circuits with 401 before the handler runs.
pub fn build_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        .route("/transfer", post(handlers::transfers::create_transfer))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/account",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/account/{id}",
            get(handlers::accounts::get_account).delete(handlers::accounts::delete_account),
        )
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
