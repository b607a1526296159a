//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::config_store::ScopedConfigStore;
use crate::context::CurrentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the gate settings store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    config_store: ScopedConfigStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, config_store: ScopedConfigStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                config_store,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the gate settings store.
    #[must_use]
    pub fn config_store(&self) -> &ScopedConfigStore {
        &self.inner.config_store
    }

    /// The store this instance serves.
    #[must_use]
    pub fn store(&self) -> CurrentStore {
        CurrentStore(self.inner.config.store_id)
    }
}
