use dioxus::prelude::*;

use super::{current_time, ChatMessage, MessageInput, MessageList, Sender};
use crate::icons::FaSpinner;
use crate::{make_client, push_toast, use_toasts, Icon, ToastLevel};

fn greeting(scoped: bool) -> ChatMessage {
    ChatMessage {
        id: 0,
        sender: Sender::Ai,
        text: if scoped {
            "Hello! Ask me anything about this document.".to_string()
        } else {
            "Hello! Ask me anything about your documents.".to_string()
        },
        timestamp: current_time(),
    }
}

/// The conversation pane: message history, busy indicator, input row.
///
/// `document_id` scopes questions to one document; without it the server
/// answers from everything the user uploaded. A failed question comes
/// back as an AI message (and a toast) so the thread keeps its shape.
#[component]
pub fn ChatWindow(document_id: Option<String>) -> Element {
    let scoped = document_id.is_some();
    let mut messages = use_signal(move || vec![greeting(scoped)]);
    let mut next_id = use_signal(|| 0u64);
    let mut busy = use_signal(|| false);
    let mut toasts = use_toasts();

    let handle_send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || busy() {
            return;
        }
        let document_id = document_id.clone();

        let user_id = {
            let mut n = next_id.write();
            *n += 1;
            *n
        };
        messages.write().push(ChatMessage {
            id: user_id,
            sender: Sender::User,
            text: text.clone(),
            timestamp: current_time(),
        });
        busy.set(true);

        spawn(async move {
            let client = make_client();
            let reply = match client.documents().ask(text, document_id).await {
                Ok(response) => response.answer,
                Err(e) => {
                    let message = e.message();
                    push_toast(&mut toasts, ToastLevel::Error, &message);
                    message
                }
            };

            let ai_id = {
                let mut n = next_id.write();
                *n += 1;
                *n
            };
            messages.write().push(ChatMessage {
                id: ai_id,
                sender: Sender::Ai,
                text: reply,
                timestamp: current_time(),
            });
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "chat-window",

            div {
                class: "chat-scroll",
                MessageList { messages: messages() }
                if busy() {
                    div {
                        class: "chat-typing",
                        span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                        span { "typing..." }
                    }
                }
            }

            MessageInput { disabled: busy(), on_send: handle_send }
        }
    }
}
