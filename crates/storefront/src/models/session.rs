//! Session-related types.
//!
//! The customer record is stored in the session at login. Before the gate
//! runs, the session is read once into a [`SessionSnapshot`] so the gate's
//! checks stay synchronous.

use gatehouse_core::{Customer, CustomerGroupId};
use tower_sessions::Session;

use crate::context::SessionProvider;

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";
}

/// Point-in-time view of the visitor's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    customer: Option<Customer>,
}

impl SessionSnapshot {
    /// Snapshot for an anonymous visitor.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { customer: None }
    }

    /// Snapshot for a logged-in customer.
    #[must_use]
    pub const fn logged_in(customer: Customer) -> Self {
        Self {
            customer: Some(customer),
        }
    }

    /// Read the snapshot from a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let customer = session.get::<Customer>(keys::CURRENT_CUSTOMER).await?;
        Ok(Self { customer })
    }
}

impl SessionProvider for SessionSnapshot {
    fn is_authenticated(&self) -> bool {
        self.customer.is_some()
    }

    fn current_customer(&self) -> Option<Customer> {
        self.customer
    }

    fn current_customer_group_id(&self) -> CustomerGroupId {
        self.customer
            .map_or(CustomerGroupId::NOT_LOGGED_IN, |customer| customer.group_id)
    }
}
