//! Evaluate the access gate for a hypothetical visitor.

use std::fmt;

use gatehouse_core::{Customer, CustomerGroupId, CustomerId, StoreId};
use gatehouse_storefront::config_store::ScopedConfigStore;
use gatehouse_storefront::context::CurrentStore;
use gatehouse_storefront::gate::{AccessDecision, AccessGate};
use gatehouse_storefront::models::SessionSnapshot;
use thiserror::Error;

/// Errors building the visitor from command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisitorError {
    #[error("--customer requires --customer-store and --group")]
    IncompleteCustomer,
    #[error("--customer-store and --group require --customer")]
    MissingCustomer,
}

/// Build the visitor's session from the optional customer arguments.
///
/// # Errors
///
/// Returns an error when only some of the customer arguments are given.
pub fn visitor_from_args(
    customer: Option<i32>,
    customer_store: Option<i32>,
    group: Option<i32>,
) -> Result<SessionSnapshot, VisitorError> {
    match (customer, customer_store, group) {
        (None, None, None) => Ok(SessionSnapshot::anonymous()),
        (Some(id), Some(store_id), Some(group_id)) => Ok(SessionSnapshot::logged_in(Customer::new(
            CustomerId::new(id),
            StoreId::new(store_id),
            CustomerGroupId::new(group_id),
        ))),
        (Some(_), _, _) => Err(VisitorError::IncompleteCustomer),
        (None, _, _) => Err(VisitorError::MissingCustomer),
    }
}

/// Every gate check for one visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub store_id: StoreId,
    pub group_id: CustomerGroupId,
    pub login_required: bool,
    pub group_gating_active: bool,
    pub customer_group_permitted: bool,
    pub visitor_permitted: bool,
    pub decision: AccessDecision,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "store {} / group {}", self.store_id, self.group_id)?;
        writeln!(f, "  login required:        {}", self.login_required)?;
        writeln!(f, "  group gating active:   {}", self.group_gating_active)?;
        writeln!(f, "  group permitted:       {}", self.customer_group_permitted)?;
        writeln!(f, "  visitor permitted:     {}", self.visitor_permitted)?;
        write!(f, "  decision:              {:?}", self.decision)
    }
}

/// Run the gate for `visitor` browsing `store_id`.
#[must_use]
pub fn evaluate(config: &ScopedConfigStore, store_id: StoreId, visitor: SessionSnapshot) -> CheckReport {
    let store = CurrentStore(store_id);
    let scope = config.for_store(store_id);
    let gate = AccessGate::new(&visitor, &store, &scope);

    CheckReport {
        store_id,
        group_id: gate.customer_group_id(),
        login_required: gate.is_login_required(),
        group_gating_active: gate.is_group_gating_active(),
        customer_group_permitted: gate.is_customer_group_permitted(),
        visitor_permitted: gate.is_visitor_permitted(),
        decision: gate.decide(),
    }
}
