//! Home page route handler.

use axum::{extract::State, response::Html};

use crate::middleware::OptionalCustomer;
use crate::state::AppState;

/// Store home page.
///
/// Only reached once the access gate has let the visitor through.
pub async fn index(
    State(state): State<AppState>,
    OptionalCustomer(customer): OptionalCustomer,
) -> Html<String> {
    let greeting = customer.map_or_else(
        || "Welcome, guest.".to_string(),
        |c| format!("Welcome back, customer {}.", c.id),
    );

    Html(format!(
        "<h1>Store {}</h1>\n<p>{greeting}</p>\n",
        state.config().store_id
    ))
}
