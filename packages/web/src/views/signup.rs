//! Signup page view with the registration form.

use dioxus::prelude::*;

use ui::components::{Alert, AlertVariant, Button, ButtonVariant, Input, Label};
use ui::{make_client, push_toast, use_auth, use_toasts, ToastLevel};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
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

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            loading.set(true);
            let client = make_client();
            match client.auth().signup(n, e, p).await {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Registration successful!".to_string()
                    } else {
                        response.message
                    };
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message()));
                }
            }
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
                        h1 { "Create an account" }
                        p { "Enter your information below to create your account" }
                    }

                    if let Some(ref message) = error() {
                        Alert { variant: AlertVariant::Destructive, "{message}" }
                    }

                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "auth-field",
                            Label { html_for: "signup-name", "Name" }
                            Input {
                                id: "signup-name",
                                r#type: "text",
                                placeholder: "John Doe",
                                value: name(),
                                required: true,
                                disabled: loading(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }

                        div {
                            class: "auth-field",
                            Label { html_for: "signup-email", "Email" }
                            Input {
                                id: "signup-email",
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
                            Label { html_for: "signup-password", "Password" }
                            Input {
                                id: "signup-password",
                                r#type: "password",
                                placeholder: "Password (min 8 characters)",
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
                            if loading() { "Creating account..." } else { "Create account" }
                        }
                    }

                    p {
                        class: "auth-switch",
                        "Already have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| { nav.push(Route::Login {}); },
                            "Login"
                        }
                    }
                }
            }

            div {
                class: "auth-aside",
                div {
                    class: "auth-aside-copy",
                    h2 { "Your Knowledge Hub Starts Here" }
                    p { "Upload documents, explore key insights, and search smarter with DeepSearch's AI capabilities." }
                    p { class: "auth-aside-fine", "Entity Extraction \u{00B7} Semantic Search" }
                }
            }
        }
    }
}
