//! Show the effective gate settings for a store.

use std::fmt::Write as _;

use gatehouse_core::StoreId;
use gatehouse_storefront::config_store::ScopedConfigStore;
use gatehouse_storefront::gate::{GateSettings, paths};

/// Describe the settings the gate would use for `store_id`.
#[must_use]
pub fn describe(config: &ScopedConfigStore, store_id: StoreId) -> String {
    let settings = GateSettings::load(&config.for_store(store_id));
    let groups = settings
        .activated_groups
        .sorted()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let mut out = format!("settings for store {store_id}\n");
    let rows = [
        (paths::REQUIRE_LOGIN, settings.require_login.to_string()),
        (
            paths::ACTIVE_BY_CUSTOMER_GROUP,
            settings.active_by_customer_group.to_string(),
        ),
        (paths::ACTIVE_CUSTOMER_GROUPS, groups),
        (paths::ACTIVE_GLOBALLY, settings.active_globally.to_string()),
    ];
    for (path, value) in rows {
        let raw = config.resolve(store_id, path).unwrap_or("<unset>");
        let _ = writeln!(out, "  {path} = {value} (raw: {raw})");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_shows_store_override() {
        let config = ScopedConfigStore::new()
            .with_default(paths::REQUIRE_LOGIN, "0")
            .with_store_value(StoreId::new(2), paths::REQUIRE_LOGIN, "1")
            .with_default(paths::ACTIVE_CUSTOMER_GROUPS, "3,2");

        let out = describe(&config, StoreId::new(2));
        assert!(out.contains("requirelogin/requirelogin = true (raw: 1)"));
        assert!(out.contains("activatebycustomersettings/activecustomers = 0,2,3 (raw: 3,2)"));
        assert!(out.contains("generalsettings/activecustomers = false (raw: <unset>)"));
    }
}
