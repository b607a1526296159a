//! Host platform collaborators consumed by the access gate.
//!
//! The gate never reaches for session, store or configuration state on its
//! own. Callers hand it implementations of these traits for the request being
//! served.

use gatehouse_core::{Customer, CustomerGroupId, StoreId};

/// Read access to the visitor's session.
pub trait SessionProvider {
    /// Whether a customer is logged in.
    fn is_authenticated(&self) -> bool;

    /// The logged-in customer, if the session resolves to one.
    fn current_customer(&self) -> Option<Customer>;

    /// Group of the current visitor.
    ///
    /// Anonymous visitors report [`CustomerGroupId::NOT_LOGGED_IN`].
    fn current_customer_group_id(&self) -> CustomerGroupId;
}

/// The storefront serving the current request.
pub trait StoreContext {
    fn current_store_id(&self) -> StoreId;
}

/// Store-scoped configuration lookups.
pub trait ConfigStore {
    /// Raw value at `path` for the current store, `None` when unset.
    fn value(&self, path: &str) -> Option<String>;

    /// Value at `path` interpreted as a flag.
    ///
    /// Unset, empty, `0` and `false` are false; anything else is true.
    fn flag(&self, path: &str) -> bool {
        self.value(path).is_some_and(|raw| parse_flag(&raw))
    }
}

/// A fixed store id, for services that serve a single storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStore(pub StoreId);

impl StoreContext for CurrentStore {
    fn current_store_id(&self) -> StoreId {
        self.0
    }
}

/// Interpret a configuration string as a flag.
#[must_use]
pub fn parse_flag(raw: &str) -> bool {
    let value = raw.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapConfig(HashMap<&'static str, &'static str>);

    impl ConfigStore for MapConfig {
        fn value(&self, path: &str) -> Option<String> {
            self.0.get(path).map(ToString::to_string)
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag(""));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag("  "));
    }

    #[test]
    fn test_flag_defaults_to_false_when_unset() {
        let config = MapConfig(HashMap::from([("a/b", "1")]));
        assert!(config.flag("a/b"));
        assert!(!config.flag("missing/path"));
    }

    #[test]
    fn test_current_store() {
        assert_eq!(CurrentStore(StoreId::new(4)).current_store_id(), StoreId::new(4));
    }
}
