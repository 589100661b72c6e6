use dioxus::prelude::*;

use ui::ChatWindow;

/// Standalone chat page asking across all of the user's documents.
#[component]
pub fn AskAi() -> Element {
    rsx! {
        div {
            class: "ask-page",
            h1 { class: "ask-page-title", "Ask AI About Your Documents" }
            ChatWindow {}
        }
    }
}
