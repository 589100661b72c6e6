//! Local persistence for the DeepSearch client.
//!
//! The browser is the only authoritative holder of the login session: the
//! backend hands out a token once and expects it back on every request, so
//! the token and the logged-in user live in `localStorage` between page
//! loads. This crate wraps that storage behind a small [`KeyValueStore`]
//! trait with two backends:
//!
//! | Backend | Target | Used for |
//! |---------|--------|----------|
//! | [`WebStorage`] | `wasm32` + `web` feature | `window.localStorage` |
//! | [`MemoryStore`] | everything else | tests and non-browser builds |
//!
//! [`Session`] layers the token/user schema on top, and [`AppConfig`] holds
//! the client configuration (API base URL).

pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

pub use config::AppConfig;
pub use session::{Session, SessionData, StoredUser};

/// A string key/value store. Reads return `None` and writes are silently
/// dropped when the underlying storage is unavailable; the session layer
/// treats missing data as "not logged in" rather than an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The session store for the current platform.
///
/// On web this is `window.localStorage`, shared across tabs. Elsewhere it
/// is a process-wide [`MemoryStore`] so that repeated calls observe the
/// same session within one process.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn default_session() -> Session<WebStorage> {
    Session::new(WebStorage::new())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn default_session() -> Session<MemoryStore> {
    use std::sync::OnceLock;
    static GLOBAL: OnceLock<MemoryStore> = OnceLock::new();
    Session::new(GLOBAL.get_or_init(MemoryStore::new).clone())
}
