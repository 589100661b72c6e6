//! # Wire DTOs
//!
//! These types mirror the backend's JSON. The server is a Mongo/Express
//! stack, so objects arrive in camelCase with `_id` identifiers; serde
//! renames keep the Rust side idiomatic. Fields the server may omit are
//! `#[serde(default)]` so older documents deserialize cleanly.

use serde::{Deserialize, Serialize};
use store::StoredUser;

/// The logged-in user as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }

    /// Project into the storage-side profile.
    pub fn to_stored(&self) -> StoredUser {
        StoredUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    /// Rebuild from a persisted profile.
    pub fn from_stored(user: &StoredUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// An uploaded document and its extracted metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// ISO 8601 timestamp as sent by the server.
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub cloudinary_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub cleaned_text_preview: Option<String>,
}

impl Document {
    /// The date portion of `uploaded_at`, for card display.
    pub fn uploaded_date(&self) -> Option<&str> {
        self.uploaded_at
            .as_deref()
            .map(|ts| ts.split('T').next().unwrap_or(ts))
    }
}

/// A named entity extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The entity kinds the extractor emits, in display order.
pub const ENTITY_KINDS: [&str; 3] = ["PERSON", "ORG", "LOCATION"];

/// Human-readable group heading for an entity kind.
pub fn entity_kind_label(kind: &str) -> &str {
    match kind {
        "PERSON" => "People",
        "ORG" => "Organizations",
        "LOCATION" => "Locations",
        _ => "Other",
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// A bare `{ "message": ... }` acknowledgement. Some endpoints abbreviate
/// the key to `msg`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerMessage {
    #[serde(alias = "msg")]
    pub message: String,
}

/// Response to a multipart upload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub document: Document,
}

/// Response to an AI question.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AskRequest {
    pub question: String,
    #[serde(rename = "documentId", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Partial update for `PUT /documents/:id`. Unset fields are left alone
/// by the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl DocumentUpdate {
    /// Update that only flips the favorite flag.
    pub fn favorite(value: bool) -> Self {
        Self {
            is_favorite: Some(value),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A document exactly as the backend serializes it.
    const DOCUMENT_JSON: &str = r#"{
        "_id": "665f1c2ab1e2d90012345678",
        "title": "Quarterly Report.pdf",
        "uploadedAt": "2025-06-04T09:12:45.120Z",
        "entities": [
            { "text": "Jane Doe", "type": "PERSON" },
            { "text": "Acme Corp", "type": "ORG" },
            { "text": "Berlin", "type": "LOCATION" }
        ],
        "cloudinaryUrl": "https://res.cloudinary.com/demo/raw/upload/q.pdf",
        "isFavorite": true,
        "uploadedBy": "665f1c2ab1e2d90012345600",
        "cleanedTextPreview": "Quarterly results for...",
        "__v": 0
    }"#;

    #[test]
    fn document_deserializes_from_server_json() {
        let doc: Document = serde_json::from_str(DOCUMENT_JSON).unwrap();
        assert_eq!(doc.id, "665f1c2ab1e2d90012345678");
        assert_eq!(doc.title, "Quarterly Report.pdf");
        assert_eq!(doc.uploaded_date(), Some("2025-06-04"));
        assert_eq!(doc.entities.len(), 3);
        assert_eq!(doc.entities[1].kind, "ORG");
        assert!(doc.is_favorite);
    }

    #[test]
    fn sparse_document_uses_defaults() {
        let doc: Document =
            serde_json::from_str(r#"{ "_id": "abc", "title": "bare.pdf" }"#).unwrap();
        assert!(doc.entities.is_empty());
        assert!(!doc.is_favorite);
        assert!(doc.uploaded_date().is_none());
        assert!(doc.cleaned_text_preview.is_none());
    }

    #[test]
    fn user_accepts_both_id_spellings() {
        let a: UserInfo =
            serde_json::from_str(r#"{ "id": "u1", "email": "a@b.c" }"#).unwrap();
        let b: UserInfo =
            serde_json::from_str(r#"{ "_id": "u1", "email": "a@b.c" }"#).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user: UserInfo =
            serde_json::from_str(r#"{ "id": "u1", "email": "a@b.c" }"#).unwrap();
        assert_eq!(user.display_name(), "a@b.c");
        user.name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");
        user.name = Some(String::new());
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn server_message_accepts_msg_key() {
        let m: ServerMessage = serde_json::from_str(r#"{ "msg": "No token" }"#).unwrap();
        assert_eq!(m.message, "No token");
    }

    #[test]
    fn ask_request_omits_document_id_when_global() {
        let global = AskRequest {
            question: "hi".to_string(),
            document_id: None,
        };
        assert_eq!(
            serde_json::to_string(&global).unwrap(),
            r#"{"question":"hi"}"#
        );

        let scoped = AskRequest {
            question: "hi".to_string(),
            document_id: Some("doc1".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&scoped).unwrap(),
            r#"{"question":"hi","documentId":"doc1"}"#
        );
    }

    #[test]
    fn favorite_update_serializes_only_the_flag() {
        let update = DocumentUpdate::favorite(true);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"isFavorite":true}"#
        );
    }

    #[test]
    fn entity_kind_labels() {
        assert_eq!(entity_kind_label("PERSON"), "People");
        assert_eq!(entity_kind_label("ORG"), "Organizations");
        assert_eq!(entity_kind_label("LOCATION"), "Locations");
        assert_eq!(entity_kind_label("GPE"), "Other");
    }
}
