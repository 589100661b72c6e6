use api::Document;
use dioxus::prelude::*;

use crate::icons::{FaFilePdf, FaSpinner, FaStar, FaTrash};
use crate::Icon;

/// One document on the dashboard grid.
///
/// The card body opens the document; the footer actions stop propagation
/// so a delete or favorite click never also navigates.
#[component]
pub fn DocumentCard(
    document: Document,
    /// True while this card's delete request is in flight.
    deleting: bool,
    on_open: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_toggle_favorite: EventHandler<(String, bool)>,
) -> Element {
    let entity_count = document.entities.len();
    let badges: Vec<_> = document.entities.iter().take(3).cloned().collect();
    let extra = entity_count.saturating_sub(badges.len());

    rsx! {
        div {
            class: "document-card",

            div {
                class: "document-card-body",
                onclick: {
                    let id = document.id.clone();
                    move |_| on_open.call(id.clone())
                },

                span {
                    class: "document-card-icon",
                    Icon { icon: FaFilePdf, width: 32, height: 32 }
                }

                div {
                    class: "document-card-info",
                    h3 {
                        class: "document-card-title",
                        title: "{document.title}",
                        "{document.title}"
                    }
                    if let Some(date) = document.uploaded_date() {
                        p { class: "document-card-date", "Uploaded: {date}" }
                    }
                    if let Some(ref preview) = document.cleaned_text_preview {
                        p { class: "document-card-preview", "{preview}" }
                    }
                    if entity_count > 0 {
                        div {
                            class: "document-card-badges",
                            for entity in badges {
                                span {
                                    key: "{entity.kind}-{entity.text}",
                                    class: "entity-badge",
                                    "{entity.text}"
                                }
                            }
                            if extra > 0 {
                                span { class: "entity-badge entity-badge--more", "+{extra} more" }
                            }
                        }
                    } else {
                        p { class: "document-card-no-entities", "No entities extracted" }
                    }
                }
            }

            div {
                class: "document-card-actions",
                button {
                    class: if document.is_favorite { "card-action card-action--favorite active" } else { "card-action card-action--favorite" },
                    title: if document.is_favorite { "Remove from favorites" } else { "Add to favorites" },
                    onclick: {
                        let id = document.id.clone();
                        let next = !document.is_favorite;
                        move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_toggle_favorite.call((id.clone(), next));
                        }
                    },
                    Icon { icon: FaStar, width: 16, height: 16 }
                }
                button {
                    class: "card-action card-action--delete",
                    title: "Delete Document",
                    disabled: deleting,
                    onclick: {
                        let id = document.id.clone();
                        move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_delete.call(id.clone());
                        }
                    },
                    if deleting {
                        span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                    } else {
                        Icon { icon: FaTrash, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
