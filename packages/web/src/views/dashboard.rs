//! The document dashboard: list, upload, delete, favorite.

use api::{Document, DocumentUpdate};
use dioxus::prelude::*;

use ui::components::{Alert, AlertVariant, Button, ButtonVariant};
use ui::icons::{FaSpinner, FaUpload};
use ui::{
    make_client, push_toast, use_toasts, DocumentCard, Fetch, Icon, ToastLevel, UploadDialog,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut documents = use_signal(|| Fetch::<Vec<Document>>::Loading);
    let mut show_upload = use_signal(|| false);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        let client = make_client();
        let result = client.documents().list().await;
        if result.is_err() {
            push_toast(&mut toasts, ToastLevel::Error, "Failed to load documents.");
        }
        documents.set(Fetch::from_result(result));
    });

    let handle_open = move |id: String| {
        nav.push(Route::DocumentView { id });
    };

    let handle_upload_success = move |document: Document| {
        // New uploads go to the top of the grid
        match &mut *documents.write() {
            Fetch::Ready(list) => list.insert(0, document),
            state => *state = Fetch::Ready(vec![document]),
        }
        show_upload.set(false);
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            "Document uploaded successfully!",
        );
    };

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        deleting_id.set(Some(id.clone()));
        spawn(async move {
            let client = make_client();
            match client.documents().delete(&id).await {
                Ok(_) => {
                    if let Fetch::Ready(list) = &mut *documents.write() {
                        list.retain(|doc| doc.id != id);
                    }
                }
                Err(e) => {
                    tracing::warn!("delete failed for {id}: {e}");
                    push_toast(&mut toasts, ToastLevel::Error, &e.message());
                }
            }
            deleting_id.set(None);
        });
    };

    let handle_toggle_favorite = move |(id, value): (String, bool)| {
        spawn(async move {
            let client = make_client();
            match client
                .documents()
                .update(&id, &DocumentUpdate::favorite(value))
                .await
            {
                Ok(updated) => {
                    if let Fetch::Ready(list) = &mut *documents.write() {
                        if let Some(doc) = list.iter_mut().find(|doc| doc.id == id) {
                            *doc = updated;
                        }
                    }
                }
                Err(e) => {
                    push_toast(&mut toasts, ToastLevel::Error, &e.message());
                }
            }
        });
    };

    let content = match documents() {
        Fetch::Loading => rsx! {
            div {
                class: "dashboard-status",
                span { class: "spin", Icon { icon: FaSpinner, width: 24, height: 24 } }
                p { "Loading documents..." }
            }
        },
        Fetch::Failed(message) => rsx! {
            div {
                class: "dashboard-status",
                Alert { variant: AlertVariant::Destructive, "{message}" }
            }
        },
        Fetch::Ready(list) if list.is_empty() => rsx! {
            div {
                class: "dashboard-empty",
                p { class: "dashboard-empty-title", "No documents found" }
                p { "Upload your first PDF to get started" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_upload.set(true),
                    Icon { icon: FaUpload, width: 16, height: 16 }
                    span { "Upload your first document" }
                }
            }
        },
        Fetch::Ready(list) => rsx! {
            div {
                class: "document-grid",
                for document in list {
                    DocumentCard {
                        key: "{document.id}",
                        document: document.clone(),
                        deleting: deleting_id() == Some(document.id.clone()),
                        on_open: handle_open,
                        on_delete: handle_delete,
                        on_toggle_favorite: handle_toggle_favorite,
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "dashboard",

            div {
                class: "dashboard-header",
                div {
                    class: "dashboard-heading",
                    h1 { "Your Documents" }
                    p { "Manage and analyze your uploaded documents" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_upload.set(true),
                    Icon { icon: FaUpload, width: 16, height: 16 }
                    span { "Upload PDF" }
                }
            }

            {content}

            if show_upload() {
                UploadDialog {
                    on_close: move |_| show_upload.set(false),
                    on_success: handle_upload_success,
                }
            }
        }
    }
}

/// Native browser confirmation before a destructive delete.
#[cfg(target_arch = "wasm32")]
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|window| {
            window
                .confirm_with_message(
                    "Are you sure you want to delete this document? This action cannot be undone.",
                )
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_delete() -> bool {
    true
}
