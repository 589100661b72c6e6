//! AI chat over the uploaded documents.
//!
//! One window component drives both flavors: the standalone page asks
//! across every document, and the modal on a document view pins the
//! question to that document by sending its id along.

use dioxus::prelude::*;

use crate::ModalOverlay;

mod chat_window;
pub use chat_window::ChatWindow;

mod message_input;
pub use message_input::MessageInput;

mod message_list;
pub use message_list::MessageList;

/// Who said a message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sender {
    User,
    Ai,
}

/// One entry in the conversation. Purely client-side state; the server
/// only ever sees the question text.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Wall-clock time the message was added, for display only.
    pub timestamp: String,
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    format!("{h:02}:{m:02}")
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn current_time() -> String {
    "00:00".to_string()
}

/// Modal wrapper around [`ChatWindow`] for the document view.
#[component]
pub fn ChatModal(document_id: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            class: "chat-modal",

            div {
                class: "chat-modal-header",
                h2 { class: "chat-modal-title", "AI Chat" }
                button {
                    class: "chat-modal-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
            }

            ChatWindow { document_id: Some(document_id.clone()) }
        }
    }
}
