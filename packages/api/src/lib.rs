//! # API crate — REST client for the DeepSearch backend
//!
//! Everything the frontend knows about the backend lives here: the wire
//! DTOs, the endpoint groups, and the single request pipeline that every
//! call goes through.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`] — base URL handling, token attachment, 401 interception |
//! | [`auth`] | `POST /auth/login`, `POST /auth/signup` |
//! | [`documents`] | document CRUD, PDF download, multipart upload, AI chat |
//! | [`models`] | DTOs mirroring the server's JSON |
//! | [`error`] | [`Error`] / [`Result`] |
//!
//! ## The request pipeline
//!
//! Calls are made through accessor groups on a shared [`Client`]:
//!
//! ```rust,no_run
//! # async fn example() -> api::Result<()> {
//! let client = api::Client::new("https://deepsearch.example.com/api")?;
//! let docs = client.documents().list().await?;
//! let answer = client.documents().ask("Who is mentioned?", None).await?;
//! # Ok(()) }
//! ```
//!
//! Every request is sent with the persisted token in the `x-auth-token`
//! header when one exists. Every `401` clears the session and, on web,
//! redirects to `/login` (unless already there) before the error reaches
//! the caller. There is no retry logic anywhere; the server is
//! authoritative and failures surface immediately.

pub mod auth;
pub mod client;
pub mod documents;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::{Error, Result};
pub use models::{
    AskResponse, AuthResponse, Document, DocumentUpdate, Entity, ServerMessage, UploadResponse,
    UserInfo,
};
