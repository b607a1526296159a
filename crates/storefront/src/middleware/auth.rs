//! Customer session helpers and extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use gatehouse_core::Customer;
use tower_sessions::Session;

use crate::models::session_keys;

/// Extractor that optionally gets the logged-in customer.
///
/// Does not reject the request when nobody is logged in; the access gate
/// has already decided whether the request may proceed.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalCustomer(customer): OptionalCustomer) -> String {
///     match customer {
///         Some(c) => format!("Hello, customer {}!", c.id),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalCustomer(pub Option<Customer>);

impl<S> FromRequestParts<S> for OptionalCustomer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Customer>(session_keys::CURRENT_CUSTOMER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(customer))
    }
}

/// Helper to set the current customer in the session (login).
///
/// The host platform authenticates the customer; this only records the result.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &Customer,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Helper to clear the current customer from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<Customer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    Ok(())
}
