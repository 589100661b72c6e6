use api::Document;
use dioxus::prelude::*;

use crate::components::{Alert, AlertVariant, Button, ButtonVariant};
use crate::icons::FaFileArrowUp;
use crate::{make_client, Icon, ModalOverlay};

/// Modal dialog for uploading a PDF.
///
/// The file is read into memory through the Dioxus file engine as soon as
/// it is picked, so the submit handler only has bytes to ship. Non-PDF
/// picks are rejected client-side; the server validates again.
#[component]
pub fn UploadDialog(
    on_close: EventHandler<()>,
    on_success: EventHandler<Document>,
) -> Element {
    let mut picked = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_file_change = move |evt: FormEvent| async move {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().into_iter().next() else {
            return;
        };

        if !name.to_lowercase().ends_with(".pdf") {
            picked.set(None);
            error.set(Some("Please select a valid PDF file.".to_string()));
            return;
        }

        match file_engine.read_file(&name).await {
            Some(bytes) => {
                error.set(None);
                picked.set(Some((name, bytes)));
            }
            None => {
                picked.set(None);
                error.set(Some("Could not read the selected file.".to_string()));
            }
        }
    };

    let handle_submit = move |_| {
        let Some((name, bytes)) = picked() else {
            error.set(Some("Please select a file to upload.".to_string()));
            return;
        };
        spawn(async move {
            uploading.set(true);
            error.set(None);

            let client = make_client();
            match client.documents().upload(&name, bytes).await {
                Ok(response) => {
                    on_success.call(response.document);
                }
                Err(e) => {
                    tracing::warn!("upload failed: {e}");
                    error.set(Some(e.message()));
                }
            }
            uploading.set(false);
        });
    };

    // Only the name is needed for display; leave the bytes in the signal.
    let picked_name: Option<String> = picked.read().as_ref().map(|(name, _)| name.clone());
    let nothing_picked = picked_name.is_none();

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !uploading() {
                    on_close.call(());
                }
            },

            div {
                class: "upload-dialog",
                h2 { class: "upload-dialog-title", "Upload PDF" }

                label {
                    class: "upload-dropzone",
                    span {
                        class: "upload-dropzone-icon",
                        Icon { icon: FaFileArrowUp, width: 28, height: 28 }
                    }
                    if let Some(ref name) = picked_name {
                        p {
                            class: "upload-dropzone-hint",
                            "Selected: "
                            span { class: "upload-dropzone-filename", "{name}" }
                        }
                    } else {
                        p {
                            class: "upload-dropzone-hint",
                            "Choose a PDF to upload"
                        }
                    }
                    input {
                        class: "upload-input",
                        r#type: "file",
                        accept: ".pdf,application/pdf",
                        disabled: uploading(),
                        onchange: handle_file_change,
                    }
                }

                if let Some(ref message) = error() {
                    Alert { variant: AlertVariant::Destructive, "{message}" }
                }

                div {
                    class: "upload-dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: uploading(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: nothing_picked || uploading(),
                        onclick: handle_submit,
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                }
            }
        }
    }
}
