//! Gatehouse Storefront library.
//!
//! This crate provides the storefront access gate and the axum service that
//! enforces it, as a library so it can be tested and embedded.
//!
//! # Modules
//!
//! - [`gate`] - The access checks and the settings they read
//! - [`context`] - Session, store and configuration traits the gate consumes
//! - [`config_store`] - Store-scoped configuration values
//! - [`middleware`] - Session layer and the gate middleware

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod config_store;
pub mod context;
pub mod error;
pub mod gate;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;

use crate::state::AppState;

/// Put `gated` behind the access gate, merge `public`, and add sessions.
///
/// The session layer wraps both so the gate and public handlers can read the
/// session.
pub fn build_app(
    gated: Router<AppState>,
    public: Router<AppState>,
    state: AppState,
    session_store: MemoryStore,
) -> Router {
    let session_layer = middleware::create_session_layer(session_store, state.config());

    gated
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::access_gate_middleware,
        ))
        .merge(public)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
