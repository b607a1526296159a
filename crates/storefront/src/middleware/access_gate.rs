//! Access gate middleware.
//!
//! Runs the [`AccessGate`] for every gated route. Visitors who must log in
//! are redirected to the login page, or receive `401 Unauthorized` on
//! `/api/` routes. Public routes are merged outside this layer.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::context::{SessionProvider, StoreContext};
use crate::error::{Result, set_sentry_user};
use crate::gate::{AccessDecision, AccessGate};
use crate::models::SessionSnapshot;
use crate::state::AppState;

/// Middleware that enforces the access gate.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn access_gate_middleware(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response> {
    let snapshot = SessionSnapshot::load(&session).await?;
    if let Some(customer) = snapshot.current_customer() {
        set_sentry_user(&customer.id);
    }

    let store = state.store();
    let config = state.config_store().for_store(store.current_store_id());
    let decision = AccessGate::new(&snapshot, &store, &config).decide();

    match decision {
        AccessDecision::Allow => Ok(next.run(request).await),
        AccessDecision::RequireLogin if request.uri().path().starts_with("/api/") => {
            Ok(StatusCode::UNAUTHORIZED.into_response())
        }
        AccessDecision::RequireLogin => {
            tracing::debug!(path = %request.uri().path(), "Redirecting visitor to login");
            Ok(Redirect::to(&state.config().login_path).into_response())
        }
    }
}
