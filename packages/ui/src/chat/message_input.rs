use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Question entry row. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn MessageInput(disabled: bool, on_send: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    let mut submit = move || {
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_send.call(text);
        draft.set(String::new());
    };

    rsx! {
        div {
            class: "chat-input-row",
            textarea {
                class: "chat-input",
                rows: 1,
                placeholder: "Ask a question...",
                value: "{draft}",
                disabled: disabled,
                oninput: move |evt| draft.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() {
                        evt.prevent_default();
                        submit();
                    }
                },
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: disabled || draft().trim().is_empty(),
                onclick: move |_| submit(),
                "Send"
            }
        }
    }
}
