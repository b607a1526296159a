//! Store-scoped configuration values.
//!
//! Values live in two scopes: a default scope and one scope per store. A
//! lookup for a store returns the store's value when it has one and falls
//! back to the default scope otherwise.
//!
//! # Environment Variables
//!
//! Default scope:
//! - `GATEHOUSE_REQUIRE_LOGIN` - `requirelogin/requirelogin`
//! - `GATEHOUSE_ACTIVE_BY_CUSTOMER_GROUP` - `activatebycustomersettings/activebycustomer`
//! - `GATEHOUSE_ACTIVE_CUSTOMER_GROUPS` - `activatebycustomersettings/activecustomers`
//! - `GATEHOUSE_ACTIVE_GLOBALLY` - `generalsettings/activecustomers`
//!
//! Store scope: the same suffixes prefixed with `GATEHOUSE_STORE_<id>_`, e.g.
//! `GATEHOUSE_STORE_2_REQUIRE_LOGIN=1`.

use std::collections::HashMap;
use std::ffi::OsString;

use gatehouse_core::StoreId;

use crate::context::ConfigStore;
use crate::gate::paths;

/// Environment variable suffix for each gate path.
const ENV_SUFFIXES: [(&str, &str); 4] = [
    ("REQUIRE_LOGIN", paths::REQUIRE_LOGIN),
    ("ACTIVE_BY_CUSTOMER_GROUP", paths::ACTIVE_BY_CUSTOMER_GROUP),
    ("ACTIVE_CUSTOMER_GROUPS", paths::ACTIVE_CUSTOMER_GROUPS),
    ("ACTIVE_GLOBALLY", paths::ACTIVE_GLOBALLY),
];

const ENV_PREFIX: &str = "GATEHOUSE_";
const STORE_ENV_PREFIX: &str = "GATEHOUSE_STORE_";

/// Two-level configuration: defaults plus per-store overrides.
#[derive(Debug, Clone, Default)]
pub struct ScopedConfigStore {
    defaults: HashMap<String, String>,
    stores: HashMap<StoreId, HashMap<String, String>>,
}

impl ScopedConfigStore {
    /// Create an empty store. Every lookup returns `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default-scope value.
    #[must_use]
    pub fn with_default(mut self, path: &str, value: impl Into<String>) -> Self {
        self.set_default(path, value);
        self
    }

    /// Set a store-scope value.
    #[must_use]
    pub fn with_store_value(
        mut self,
        store_id: StoreId,
        path: &str,
        value: impl Into<String>,
    ) -> Self {
        self.set_store_value(store_id, path, value);
        self
    }

    pub fn set_default(&mut self, path: &str, value: impl Into<String>) {
        self.defaults.insert(path.to_string(), value.into());
    }

    pub fn set_store_value(&mut self, store_id: StoreId, path: &str, value: impl Into<String>) {
        self.stores
            .entry(store_id)
            .or_default()
            .insert(path.to_string(), value.into());
    }

    /// Resolve `path` for `store_id`.
    #[must_use]
    pub fn resolve(&self, store_id: StoreId, path: &str) -> Option<&str> {
        self.stores
            .get(&store_id)
            .and_then(|values| values.get(path))
            .or_else(|| self.defaults.get(path))
            .map(String::as_str)
    }

    /// View of this configuration for one store.
    #[must_use]
    pub const fn for_store(&self, store_id: StoreId) -> StoreScope<'_> {
        StoreScope {
            config: self,
            store_id,
        }
    }

    /// Load gate settings from the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Load gate settings from `(name, value)` pairs.
    ///
    /// Unknown names are ignored. Store-scoped names whose id is not an
    /// integer are skipped with a warning.
    #[must_use]
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut config = Self::new();

        for (name, value) in vars {
            if let Some(rest) = name.strip_prefix(STORE_ENV_PREFIX) {
                let Some((id, suffix)) = rest.split_once('_') else {
                    continue;
                };
                let Some(path) = path_for_suffix(suffix) else {
                    continue;
                };
                match id.parse::<StoreId>() {
                    Ok(store_id) => config.set_store_value(store_id, path, value),
                    Err(_) => tracing::warn!(variable = %name, "Ignoring store override with invalid store id"),
                }
            } else if let Some(suffix) = name.strip_prefix(ENV_PREFIX) {
                if let Some(path) = path_for_suffix(suffix) {
                    config.set_default(path, value);
                }
            }
        }

        config
    }
}

/// Keep the pairs that are valid UTF-8.
fn utf8_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter().filter_map(|(name, value)| {
        match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (Ok(name), Err(_)) => {
                tracing::debug!(variable = %name, "Skipping variable with non UTF-8 value");
                None
            }
            (Err(name), _) => {
                tracing::debug!(variable = ?name, "Skipping variable with non UTF-8 name");
                None
            }
        }
    })
}

fn path_for_suffix(suffix: &str) -> Option<&'static str> {
    ENV_SUFFIXES
        .iter()
        .find(|(name, _)| *name == suffix)
        .map(|(_, path)| *path)
}

/// [`ScopedConfigStore`] bound to one store.
#[derive(Debug, Clone, Copy)]
pub struct StoreScope<'a> {
    config: &'a ScopedConfigStore,
    store_id: StoreId,
}

impl StoreScope<'_> {
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }
}

impl ConfigStore for StoreScope<'_> {
    fn value(&self, path: &str) -> Option<String> {
        self.config.resolve(self.store_id, path).map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_store_value_overrides_default() {
        let config = ScopedConfigStore::new()
            .with_default(paths::REQUIRE_LOGIN, "1")
            .with_store_value(StoreId::new(2), paths::REQUIRE_LOGIN, "0");

        assert!(config.for_store(StoreId::new(1)).flag(paths::REQUIRE_LOGIN));
        assert!(!config.for_store(StoreId::new(2)).flag(paths::REQUIRE_LOGIN));
    }

    #[test]
    fn test_unset_path_resolves_to_none() {
        let config = ScopedConfigStore::new();
        assert_eq!(config.resolve(StoreId::new(1), paths::ACTIVE_GLOBALLY), None);
        assert_eq!(config.for_store(StoreId::new(1)).value(paths::ACTIVE_GLOBALLY), None);
    }

    #[test]
    fn test_from_vars_maps_default_scope() {
        let config = ScopedConfigStore::from_vars(vars(&[
            ("GATEHOUSE_REQUIRE_LOGIN", "1"),
            ("GATEHOUSE_ACTIVE_CUSTOMER_GROUPS", "2,3"),
            ("PATH", "/usr/bin"),
        ]));

        let scope = config.for_store(StoreId::new(1));
        assert!(scope.flag(paths::REQUIRE_LOGIN));
        assert_eq!(scope.value(paths::ACTIVE_CUSTOMER_GROUPS).as_deref(), Some("2,3"));
        assert!(!scope.flag(paths::ACTIVE_GLOBALLY));
    }

    #[test]
    fn test_from_vars_maps_store_scope() {
        let config = ScopedConfigStore::from_vars(vars(&[
            ("GATEHOUSE_ACTIVE_GLOBALLY", "0"),
            ("GATEHOUSE_STORE_3_ACTIVE_GLOBALLY", "1"),
            ("GATEHOUSE_STORE_x_ACTIVE_GLOBALLY", "1"),
            ("GATEHOUSE_STORE_4_UNKNOWN", "1"),
        ]));

        assert!(config.for_store(StoreId::new(3)).flag(paths::ACTIVE_GLOBALLY));
        assert!(!config.for_store(StoreId::new(4)).flag(paths::ACTIVE_GLOBALLY));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let invalid = || OsString::from_vec(vec![0xff, 0xfe]);
        let vars = vec![
            (OsString::from("UNRELATED_VAR"), invalid()),
            (invalid(), OsString::from("1")),
            (OsString::from("GATEHOUSE_ACTIVE_GLOBALLY"), invalid()),
            (OsString::from("GATEHOUSE_REQUIRE_LOGIN"), OsString::from("1")),
        ];

        let kept: Vec<_> = utf8_vars(vars).collect();
        assert_eq!(kept, vec![("GATEHOUSE_REQUIRE_LOGIN".to_string(), "1".to_string())]);

        let config = ScopedConfigStore::from_vars(kept);
        let scope = config.for_store(StoreId::new(1));
        assert!(scope.flag(paths::REQUIRE_LOGIN));
        assert_eq!(scope.value(paths::ACTIVE_GLOBALLY), None);
    }
}
