//! Authentication context and hooks for the UI.
//!
//! The session lives in browser storage (see `store::Session`); this
//! module keeps an in-memory [`AuthState`] in sync with it. Storage and
//! state always change together: [`sign_in`] persists before updating the
//! signal, [`sign_out`] clears before resetting it, so a crash between
//! the two can only leave the recoverable persisted side behind.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
    /// True until the persisted session has been restored once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session on mount. `load` validates the stored
    // pair and clears corrupt state, so this either yields a full session
    // or a clean logged-out one.
    use_effect(move || {
        let restored = store::default_session().load();
        auth_state.set(match restored {
            Some(data) => AuthState {
                user: Some(UserInfo::from_stored(&data.user)),
                token: Some(data.token),
                loading: false,
            },
            None => AuthState {
                user: None,
                token: None,
                loading: false,
            },
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a fresh session and reflect it in the auth state.
pub fn sign_in(auth: &mut Signal<AuthState>, token: &str, user: &UserInfo) {
    store::default_session().save(token, &user.to_stored());
    auth.set(AuthState {
        user: Some(user.clone()),
        token: Some(token.to_string()),
        loading: false,
    });
    tracing::info!("signed in as {}", user.email);
}

/// Drop the session. Idempotent: signing out twice is a no-op.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    store::default_session().clear();
    auth.set(AuthState {
        user: None,
        token: None,
        loading: false,
    });
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        sign_out(&mut auth_state);
        // Redirect to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
