//! Storefront access gate.
//!
//! Decides whether the current visitor may view store content based on login
//! state, customer group activation and the store the customer signed up in.
//!
//! # Rules
//!
//! A visitor is permitted when they are logged in and one of:
//! - customers are activated globally,
//! - the customer was created from the back office,
//! - the customer signed up in the store being browsed.
//!
//! Anonymous visitors belong to [`CustomerGroupId::NOT_LOGGED_IN`], which is
//! always an activated group.

pub mod settings;

use gatehouse_core::{CustomerGroupId, StoreId};

use crate::context::{ConfigStore, SessionProvider, StoreContext};

pub use settings::{GateSettings, paths};

/// Outcome of [`AccessGate::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Serve the request.
    Allow,
    /// Send the visitor to the login page.
    RequireLogin,
}

/// Access checks for a single request.
///
/// Settings are read from the configuration store once, when the gate is
/// built. Build one gate per request.
pub struct AccessGate<'a> {
    session: &'a dyn SessionProvider,
    store: &'a dyn StoreContext,
    settings: GateSettings,
}

impl<'a> AccessGate<'a> {
    /// Build a gate, loading its settings from `config`.
    #[must_use]
    pub fn new(
        session: &'a dyn SessionProvider,
        store: &'a dyn StoreContext,
        config: &dyn ConfigStore,
    ) -> Self {
        Self::with_settings(session, store, GateSettings::load(config))
    }

    /// Build a gate from settings that were already loaded.
    #[must_use]
    pub fn with_settings(
        session: &'a dyn SessionProvider,
        store: &'a dyn StoreContext,
        settings: GateSettings,
    ) -> Self {
        Self {
            session,
            store,
            settings,
        }
    }

    /// Settings this gate evaluates against.
    #[must_use]
    pub const fn settings(&self) -> &GateSettings {
        &self.settings
    }

    /// Whether the visitor is logged in and allowed in the current store.
    ///
    /// Fails closed: an authenticated session without a customer record is
    /// not permitted.
    #[must_use]
    pub fn is_visitor_permitted(&self) -> bool {
        if !self.session.is_authenticated() {
            return false;
        }

        if self.settings.active_globally {
            return true;
        }

        let Some(customer) = self.session.current_customer() else {
            return false;
        };

        // Back-office accounts cannot be attached to a storefront.
        if customer.is_admin_created() {
            return true;
        }

        customer.store_id == self.store.current_store_id()
    }

    /// Whether the visitor's customer group is activated.
    #[must_use]
    pub fn is_customer_group_permitted(&self) -> bool {
        self.settings
            .activated_groups
            .contains(self.session.current_customer_group_id())
    }

    /// Whether the store requires a login to browse.
    #[must_use]
    pub const fn is_login_required(&self) -> bool {
        self.settings.require_login
    }

    /// Whether gating is scoped by customer group.
    #[must_use]
    pub const fn is_group_gating_active(&self) -> bool {
        self.settings.active_by_customer_group
    }

    /// Combine the checks into a decision for the request.
    ///
    /// Groups that are not activated are exempt from the login requirement
    /// while group gating is on. Anonymous visitors never are.
    #[must_use]
    pub fn decide(&self) -> AccessDecision {
        let decision = if !self.is_login_required()
            || (self.is_group_gating_active() && !self.is_customer_group_permitted())
            || self.is_visitor_permitted()
        {
            AccessDecision::Allow
        } else {
            AccessDecision::RequireLogin
        };

        tracing::debug!(
            store_id = %self.store.current_store_id(),
            group_id = %self.session.current_customer_group_id(),
            authenticated = self.session.is_authenticated(),
            ?decision,
            "Access gate evaluated"
        );

        decision
    }

    /// The store the gate evaluates against.
    #[must_use]
    pub fn store_id(&self) -> StoreId {
        self.store.current_store_id()
    }

    /// The visitor's customer group.
    #[must_use]
    pub fn customer_group_id(&self) -> CustomerGroupId {
        self.session.current_customer_group_id()
    }
}
