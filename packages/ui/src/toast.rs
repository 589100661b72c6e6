//! Transient notifications.
//!
//! Every user-visible success or failure goes through here: a global
//! signal holds the queue, [`push_toast`] appends to it, and [`ToastHost`]
//! renders the stack in a fixed overlay. On web a toast dismisses itself
//! after a few seconds; everywhere it can be dismissed by hand.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const DISMISS_AFTER_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Append a toast to the queue and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut queue = toasts.write();
        queue.next_id += 1;
        let id = queue.next_id;
        queue.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    #[cfg(target_arch = "wasm32")]
    {
        let mut toasts = *toasts;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            toasts.write().entries.retain(|toast| toast.id != id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Provides the toast context and renders the stack above its children.
#[component]
pub fn ToastHost(children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in toasts().entries {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    rsx! {
        div {
            class: "{toast.level.class()}",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-dismiss",
                title: "Dismiss",
                onclick: move |_| {
                    toasts.write().entries.retain(|t| t.id != id);
                },
                "\u{2715}"
            }
        }
    }
}
