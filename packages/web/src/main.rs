use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, Navbar, ToastHost};
use views::{AskAi, Dashboard, DocumentView, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/documents/:id")]
        DocumentView { id: String },
        #[route("/ask")]
        AskAi {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastHost {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/login`; the login view forwards signed-in users to
/// the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Unknown paths fall back to the login page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Shell for the authenticated pages: navbar, content, footer.
///
/// While the persisted session is restoring, render a placeholder rather
/// than bouncing to login and back. Once restored, unauthenticated users
/// are redirected (replace, so Back does not return them here).
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! {
            div {
                class: "app-loading",
                p { "Loading application..." }
            }
        };
    }

    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            footer {
                class: "app-footer",
                "\u{00A9} {current_year()} DeepSearch. All rights reserved."
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    2026
}
