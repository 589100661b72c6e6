//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::make_client;

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost, ToastLevel, Toasts};

mod fetch;
pub use fetch::Fetch;

mod markdown;
pub use markdown::render_markdown;

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::ModalOverlay;

mod document_card;
pub use document_card::DocumentCard;

mod upload_dialog;
pub use upload_dialog::UploadDialog;

mod pdf_viewer;
pub use pdf_viewer::PdfViewer;

mod entity_sidebar;
pub use entity_sidebar::EntitySidebar;

pub mod chat;
pub use chat::{ChatModal, ChatWindow};
