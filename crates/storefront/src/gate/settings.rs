//! Gate settings read from the configuration store.

use gatehouse_core::{ActivatedGroups, parse_group_list};

use crate::context::ConfigStore;

/// Configuration paths read by the gate.
pub mod paths {
    /// Whether anonymous browsing is disallowed.
    pub const REQUIRE_LOGIN: &str = "requirelogin/requirelogin";

    /// Whether gating is scoped by customer group.
    pub const ACTIVE_BY_CUSTOMER_GROUP: &str = "activatebycustomersettings/activebycustomer";

    /// Comma separated list of activated customer group ids.
    pub const ACTIVE_CUSTOMER_GROUPS: &str = "activatebycustomersettings/activecustomers";

    /// Whether customers may access every store regardless of where they signed up.
    pub const ACTIVE_GLOBALLY: &str = "generalsettings/activecustomers";

    /// Every path the gate reads.
    pub const ALL: [&str; 4] = [
        REQUIRE_LOGIN,
        ACTIVE_BY_CUSTOMER_GROUP,
        ACTIVE_CUSTOMER_GROUPS,
        ACTIVE_GLOBALLY,
    ];
}

/// Settings for one store, read once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateSettings {
    pub require_login: bool,
    pub active_by_customer_group: bool,
    pub activated_groups: ActivatedGroups,
    pub active_globally: bool,
}

impl GateSettings {
    /// Read every gate setting from `config`.
    ///
    /// Each path is looked up exactly once. Group list tokens that are not
    /// integers are logged and ignored.
    #[must_use]
    pub fn load(config: &dyn ConfigStore) -> Self {
        let raw_groups = config.value(paths::ACTIVE_CUSTOMER_GROUPS).unwrap_or_default();
        let parsed = parse_group_list(&raw_groups);
        if !parsed.rejected.is_empty() {
            tracing::warn!(
                path = paths::ACTIVE_CUSTOMER_GROUPS,
                rejected = ?parsed.rejected,
                "Ignoring non-numeric customer group ids"
            );
        }

        Self {
            require_login: config.flag(paths::REQUIRE_LOGIN),
            active_by_customer_group: config.flag(paths::ACTIVE_BY_CUSTOMER_GROUP),
            activated_groups: parsed.groups,
            active_globally: config.flag(paths::ACTIVE_GLOBALLY),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use gatehouse_core::CustomerGroupId;

    use super::*;

    struct MapConfig(HashMap<&'static str, &'static str>);

    impl ConfigStore for MapConfig {
        fn value(&self, path: &str) -> Option<String> {
            self.0.get(path).map(ToString::to_string)
        }
    }

    #[test]
    fn test_load_defaults_when_unset() {
        let settings = GateSettings::load(&MapConfig(HashMap::new()));
        assert_eq!(settings, GateSettings::default());
        assert_eq!(settings.activated_groups.sorted(), vec![CustomerGroupId::NOT_LOGGED_IN]);
    }

    #[test]
    fn test_load_reads_every_path() {
        let config = MapConfig(HashMap::from([
            (paths::REQUIRE_LOGIN, "1"),
            (paths::ACTIVE_BY_CUSTOMER_GROUP, "1"),
            (paths::ACTIVE_CUSTOMER_GROUPS, "2,3"),
            (paths::ACTIVE_GLOBALLY, "0"),
        ]));

        let settings = GateSettings::load(&config);
        assert!(settings.require_login);
        assert!(settings.active_by_customer_group);
        assert!(!settings.active_globally);
        assert!(settings.activated_groups.contains(CustomerGroupId::new(2)));
        assert!(settings.activated_groups.contains(CustomerGroupId::new(3)));
        assert!(settings.activated_groups.contains(CustomerGroupId::NOT_LOGGED_IN));
    }

    #[test]
    fn test_load_tolerates_malformed_group_list() {
        let config = MapConfig(HashMap::from([(paths::ACTIVE_CUSTOMER_GROUPS, "abc,,5")]));
        let settings = GateSettings::load(&config);
        assert_eq!(
            settings.activated_groups.sorted(),
            vec![CustomerGroupId::new(0), CustomerGroupId::new(5)]
        );
    }
}
