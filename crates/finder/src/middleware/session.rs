//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Quiz state is small
//! and disposable, so the store does not need to survive restarts.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::FinderConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "petal_session";

/// Session expiry time in seconds (1 day).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &FinderConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
