use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::LogoutButton;

/// Top navigation bar: brand on the left, session controls on the right.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/dashboard",
                "Deep"
                span { class: "navbar-brand-accent", "Search" }
            }

            div {
                class: "navbar-links",
                if let Some(ref user) = state.user {
                    span {
                        class: "navbar-welcome",
                        "Welcome, {user.display_name()}!"
                    }
                    a {
                        class: "navbar-link",
                        href: "/ask",
                        "Ask AI"
                    }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    a {
                        class: "navbar-link",
                        href: "/login",
                        "Login"
                    }
                    a {
                        class: "navbar-link navbar-link--cta",
                        href: "/signup",
                        "Signup"
                    }
                }
            }
        }
    }
}
