//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! # Gated
//! GET  /                          - Store home
//! GET  /api/store                 - Store and visitor access summary
//!
//! # Public
//! GET  /health                    - Health check
//! GET  /customer/account/login    - Login page (path configurable)
//! POST /customer/account/logout   - Logout action
//! ```

pub mod account;
pub mod api;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub const HOME_PATH: &str = "/";
pub const STORE_API_PATH: &str = "/api/store";
pub const HEALTH_PATH: &str = "/health";
/// Logout action path.
pub const LOGOUT_PATH: &str = "/customer/account/logout";

/// Paths served by fixed routes. The login page cannot use any of them.
pub const RESERVED_PATHS: [&str; 4] = [HOME_PATH, STORE_API_PATH, HEALTH_PATH, LOGOUT_PATH];

/// Routes that sit behind the access gate.
pub fn gated_routes() -> Router<AppState> {
    Router::new()
        .route(HOME_PATH, get(home::index))
        .route(STORE_API_PATH, get(api::store_summary))
}

/// Routes every visitor can reach, including the login page at `login_path`.
pub fn public_routes(login_path: &str) -> Router<AppState> {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(login_path, get(account::login_page))
        .route(LOGOUT_PATH, post(account::logout))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
