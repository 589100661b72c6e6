//! Single-document page: PDF preview, entity sidebar, per-document chat.
//!
//! The page fetches the document metadata itself; the PDF blob fetch is a
//! second, independent state machine inside `PdfViewer`, so a missing file
//! still shows the title and entities.

use api::{Document, Entity};
use dioxus::prelude::*;

use ui::components::{Alert, AlertVariant, Button, ButtonVariant};
use ui::icons::{FaComments, FaSpinner};
use ui::{make_client, ChatModal, EntitySidebar, Fetch, Icon, PdfViewer};

#[component]
pub fn DocumentView(id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut document = use_signal(|| Fetch::<Document>::Loading);
    let mut selected_entity = use_signal(|| Option::<Entity>::None);
    let mut show_chat = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            document.set(Fetch::Loading);
            selected_entity.set(None);

            let client = make_client();
            document.set(Fetch::from_result(client.documents().get(&id).await));
        }
    });

    match document() {
        Fetch::Loading => rsx! {
            div {
                class: "page-status",
                span { class: "spin", Icon { icon: FaSpinner, width: 24, height: 24 } }
                span { "Loading document..." }
            }
        },
        Fetch::Failed(message) => rsx! {
            div {
                class: "page-status",
                Alert { variant: AlertVariant::Destructive, "{message}" }
            }
        },
        Fetch::Ready(doc) => rsx! {
            div {
                class: "document-view",

                section {
                    class: "panel document-panel",
                    div {
                        class: "panel-header",
                        h1 { class: "panel-title", "{doc.title}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_chat.set(true),
                            Icon { icon: FaComments, width: 16, height: 16 }
                            span { "Ask AI" }
                        }
                    }
                    PdfViewer {
                        document_id: doc.id.clone(),
                        title: doc.title.clone(),
                    }
                }

                aside {
                    class: "panel entity-panel",
                    div {
                        class: "panel-header",
                        h2 { class: "panel-title", "Entities" }
                    }
                    EntitySidebar {
                        entities: doc.entities.clone(),
                        selected: selected_entity(),
                        on_select: move |entity| selected_entity.set(Some(entity)),
                    }
                }

                if show_chat() {
                    ChatModal {
                        document_id: doc.id.clone(),
                        on_close: move |_| show_chat.set(false),
                    }
                }
            }
        },
    }
}
