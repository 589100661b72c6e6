//! # PDF viewer — blob fetch and render
//!
//! The viewer owns the second half of the document-view state machine:
//! the metadata fetch lives in the page, the PDF blob fetch lives here,
//! and each can fail independently (a document whose file is gone still
//! shows its entities).
//!
//! The flow per document id:
//!
//! 1. `Fetch::Loading` — request `GET /documents/:id/download` through the
//!    authenticated pipeline.
//! 2. The API layer rejects non-`application/pdf` bodies, so an error page
//!    can never end up inside the viewer frame.
//! 3. The bytes become a browser object URL rendered in an `iframe`; the
//!    browser's built-in viewer supplies paging and zoom.
//!
//! Object URLs pin the blob in memory until revoked, so the previous URL
//! is released on every re-fetch and on unmount.

use dioxus::prelude::*;

use crate::components::{Alert, AlertVariant};
use crate::icons::{FaDownload, FaSpinner, FaUpRightFromSquare};
use crate::{make_client, Fetch, Icon};

#[component]
pub fn PdfViewer(document_id: String, title: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| document_id.clone());
    if *id_signal.peek() != document_id {
        id_signal.set(document_id.clone());
    }

    let mut state = use_signal(|| Fetch::<String>::Loading);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            if let Fetch::Ready(old_url) = &*state.peek() {
                revoke_object_url(old_url);
            }
            state.set(Fetch::Loading);

            let client = make_client();
            match client.documents().download(&id).await {
                Ok(bytes) => match create_object_url(&bytes) {
                    Some(url) => state.set(Fetch::Ready(url)),
                    None => state.set(Fetch::Failed(
                        "Could not create a preview for this PDF.".to_string(),
                    )),
                },
                Err(e) => {
                    tracing::warn!("failed to fetch PDF {id}: {e}");
                    state.set(Fetch::Failed(e.message()));
                }
            }
        }
    });

    use_drop(move || {
        if let Fetch::Ready(url) = &*state.peek() {
            revoke_object_url(url);
        }
    });

    let file_url = state().ready().cloned();

    let frame = match state() {
        Fetch::Loading => rsx! {
            div {
                class: "pdf-status",
                span { class: "spin", Icon { icon: FaSpinner, width: 20, height: 20 } }
                "Loading PDF..."
            }
        },
        Fetch::Failed(message) => rsx! {
            div {
                class: "pdf-status",
                Alert { variant: AlertVariant::Destructive, "{message}" }
            }
        },
        Fetch::Ready(url) => rsx! {
            iframe {
                class: "pdf-iframe",
                src: "{url}",
                title: "{title}",
            }
        },
    };

    rsx! {
        div {
            class: "pdf-viewer",

            div {
                class: "pdf-toolbar",
                if let Some(ref url) = file_url {
                    a {
                        class: "pdf-toolbar-action",
                        href: "{url}",
                        download: "{title}",
                        title: "Download",
                        Icon { icon: FaDownload, width: 16, height: 16 }
                    }
                    a {
                        class: "pdf-toolbar-action",
                        href: "{url}",
                        target: "_blank",
                        title: "Open in new tab",
                        Icon { icon: FaUpRightFromSquare, width: 16, height: 16 }
                    }
                }
            }

            div {
                class: "pdf-frame",
                {frame}
            }
        }
    }
}

/// Wrap PDF bytes in a blob and hand back an object URL for the iframe.
#[cfg(target_arch = "wasm32")]
fn create_object_url(bytes: &[u8]) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");

    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn create_object_url(_bytes: &[u8]) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(not(target_arch = "wasm32"))]
fn revoke_object_url(_url: &str) {}
