use dioxus::prelude::*;

use super::{ChatMessage, Sender};
use crate::render_markdown;

/// The conversation so far.
#[component]
pub fn MessageList(messages: Vec<ChatMessage>) -> Element {
    rsx! {
        ul {
            class: "message-list",
            for message in messages {
                MessageItem { key: "{message.id}", message: message.clone() }
            }
        }
    }
}

/// One message row. AI answers are markdown and render as HTML (sanitized
/// in `render_markdown`); user messages stay plain text.
#[component]
fn MessageItem(message: ChatMessage) -> Element {
    match message.sender {
        Sender::User => rsx! {
            li {
                class: "message message--user",
                div {
                    class: "message-bubble",
                    title: "{message.timestamp}",
                    p { "{message.text}" }
                }
            }
        },
        Sender::Ai => rsx! {
            li {
                class: "message message--ai",
                div {
                    class: "message-bubble",
                    title: "{message.timestamp}",
                    dangerous_inner_html: render_markdown(&message.text),
                }
            }
        },
    }
}
