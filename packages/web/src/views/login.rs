//! Login page view with the email/password form.

use dioxus::prelude::*;

use ui::components::{Alert, AlertVariant, Button, ButtonVariant, Input, Label};
use ui::{make_client, sign_in, use_auth};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in -> straight to the dashboard
    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let client = make_client();
            match client
                .auth()
                .login(email().trim().to_string(), password())
                .await
            {
                Ok(response) => {
                    if response.token.is_empty() {
                        error.set(Some(
                            "Login succeeded but the response was missing a token.".to_string(),
                        ));
                    } else {
                        sign_in(&mut auth, &response.token, &response.user);
                        nav.replace(Route::Dashboard {});
                    }
                }
                Err(e) => {
                    error.set(Some(e.message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-panel",

                a {
                    class: "auth-brand",
                    href: "/",
                    "Deep"
                    span { class: "auth-brand-accent", "Search" }
                }

                div {
                    class: "auth-form-wrap",

                    div {
                        class: "auth-heading",
                        h1 { "Welcome to DeepSearch" }
                        p { "Enter your credentials to access your account" }
                    }

                    if let Some(ref message) = error() {
                        Alert { variant: AlertVariant::Destructive, "{message}" }
                    }

                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "auth-field",
                            Label { html_for: "login-email", "Email" }
                            Input {
                                id: "login-email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                required: true,
                                disabled: loading(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }

                        div {
                            class: "auth-field",
                            Label { html_for: "login-password", "Password" }
                            Input {
                                id: "login-password",
                                r#type: "password",
                                placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                                value: password(),
                                required: true,
                                disabled: loading(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            class: "auth-submit",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    p {
                        class: "auth-switch",
                        "Don't have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| { nav.push(Route::Signup {}); },
                            "Sign up"
                        }
                    }
                }
            }

            div {
                class: "auth-aside",
                div {
                    class: "auth-aside-copy",
                    h2 { "Smart Search with AI" }
                    p { "Log in to explore intelligent document understanding powered by NLP & ML." }
                    p { class: "auth-aside-fine", "Entity Extraction \u{00B7} Semantic Match" }
                }
            }
        }
    }
}
