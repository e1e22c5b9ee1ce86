//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::FinderConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// finder configuration. The catalog and rule table live in `petal-core`
/// as compiled-in data, so there is no database or client to carry here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FinderConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get a reference to the finder configuration.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.inner.config
    }
}
