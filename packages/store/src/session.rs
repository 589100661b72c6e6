//! # Login session persistence
//!
//! The backend authenticates requests with an opaque token sent in the
//! `x-auth-token` header. The client keeps that token, together with the
//! logged-in user's profile, under two well-known storage keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"token"` | the raw token string |
//! | `"user"` | the user profile as JSON |
//!
//! [`Session`] is the only code that touches those keys. Its contract:
//!
//! - A token is never observable without a user: [`Session::load`] returns
//!   `Some` only when both keys are present and the user JSON parses to a
//!   plausible profile. Anything else clears **both** keys and returns
//!   `None`, so a half-written or corrupted session self-heals into a clean
//!   logged-out state.
//! - [`Session::clear`] is idempotent; logging out twice is a no-op.

use serde::{Deserialize, Serialize};

use crate::KeyValueStore;

/// Storage key for the auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the logged-in user profile.
pub const USER_KEY: &str = "user";

/// The persisted user profile.
///
/// Mirrors the backend's user object without depending on the API crate;
/// unknown fields in stored JSON are ignored so older sessions survive
/// profile additions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl StoredUser {
    /// A profile is usable when it identifies someone.
    fn is_plausible(&self) -> bool {
        !self.id.is_empty() || !self.email.is_empty()
    }
}

/// A restored session: token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub token: String,
    pub user: StoredUser,
}

/// Typed access to the persisted session.
#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the persisted session, if any.
    ///
    /// Clears both keys and returns `None` when the stored state is
    /// incomplete or corrupt.
    pub fn load(&self) -> Option<SessionData> {
        let Some(token) = self.store.get(TOKEN_KEY) else {
            // A leftover user without a token is stale; drop it.
            self.store.remove(USER_KEY);
            return None;
        };
        let Some(raw_user) = self.store.get(USER_KEY) else {
            // Token without a user is a broken session.
            self.clear();
            return None;
        };

        match serde_json::from_str::<StoredUser>(&raw_user) {
            Ok(user) if user.is_plausible() => Some(SessionData { token, user }),
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist a fresh session after login.
    pub fn save(&self, token: &str, user: &StoredUser) {
        self.store.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    /// The token alone, for attaching to outgoing requests.
    ///
    /// Reads the raw key without validating the user so the request
    /// pipeline stays cheap; full validation happens in [`Session::load`].
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Drop the session. Safe to call any number of times.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new())
    }

    fn alice() -> StoredUser {
        StoredUser {
            id: "665f1c2ab1e2d90012345678".to_string(),
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
        }
    }

    #[test]
    fn save_then_load_restores_the_session() {
        let s = session();
        s.save("tok-abc123", &alice());

        let data = s.load().expect("session should restore");
        assert_eq!(data.token, "tok-abc123");
        assert_eq!(data.user, alice());
        assert_eq!(s.token().as_deref(), Some("tok-abc123"));
    }

    #[test]
    fn load_is_none_when_nothing_stored() {
        assert!(session().load().is_none());
        assert!(session().token().is_none());
    }

    #[test]
    fn token_without_user_clears_both_keys() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "orphan-token");

        let s = Session::new(store.clone());
        assert!(s.load().is_none());
        // The orphan token must be gone too.
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn user_without_token_is_dropped() {
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"id":"u1","email":"a@b.c"}"#);

        let s = Session::new(store.clone());
        assert!(s.load().is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn corrupt_user_json_clears_the_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");

        let s = Session::new(store.clone());
        assert!(s.load().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn user_without_identity_is_rejected() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, r#"{"name":"Ghost"}"#);

        let s = Session::new(store.clone());
        assert!(s.load().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn stored_user_ignores_unknown_fields() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(
            USER_KEY,
            r#"{"id":"u1","email":"a@b.c","name":"A","role":"admin"}"#,
        );

        let data = Session::new(store).load().expect("extra fields are fine");
        assert_eq!(data.user.id, "u1");
    }

    #[test]
    fn clear_is_idempotent() {
        let s = session();
        s.save("tok", &alice());
        s.clear();
        s.clear();
        assert!(s.load().is_none());
    }

    #[test]
    fn clones_of_a_memory_store_share_the_session() {
        let store = MemoryStore::new();
        Session::new(store.clone()).save("tok", &alice());
        assert!(Session::new(store).load().is_some());
    }
}
