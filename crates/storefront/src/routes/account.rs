//! Customer account routes.
//!
//! Credential checks belong to the host platform, which records the
//! authenticated customer with [`set_current_customer`](crate::middleware::set_current_customer).
//! These handlers only render the login page and end the session.

use axum::response::{Html, IntoResponse, Redirect};
use tower_sessions::Session;

use crate::error::{Result, clear_sentry_user};
use crate::middleware::clear_current_customer;

const LOGIN_PAGE: &str = "<h1>Customer Login</h1>\n<p>Please log in to browse this store.</p>\n";

/// Login page.
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// Logout action.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_current_customer(&session).await?;
    clear_sentry_user();
    tracing::info!("Customer logged out");
    Ok(Redirect::to("/"))
}
