//! Document endpoints: CRUD, PDF download, multipart upload, and the AI
//! question endpoint.

use crate::client::Client;
use crate::error::{Error, Result};
use crate::models::{
    AskRequest, AskResponse, Document, DocumentUpdate, ServerMessage, UploadResponse,
};

/// Multipart field name the backend's upload middleware expects.
const UPLOAD_FIELD: &str = "pdf";

/// Content type a download must carry to be handed to the viewer.
const PDF_MIME: &str = "application/pdf";

/// Documents API accessor.
#[derive(Debug)]
pub struct DocumentsApi<'a> {
    pub(crate) client: &'a Client,
}

impl DocumentsApi<'_> {
    /// `GET /documents` — all documents of the authenticated user.
    pub async fn list(&self) -> Result<Vec<Document>> {
        self.client.get_json("documents").await
    }

    /// `GET /documents/:id` — one document with its entities.
    pub async fn get(&self, id: &str) -> Result<Document> {
        self.client.get_json(&format!("documents/{id}")).await
    }

    /// `GET /documents/:id/download` — the raw PDF bytes.
    ///
    /// Rejects responses whose content type is not `application/pdf`; an
    /// HTML error page or a JSON body must not reach the viewer.
    pub async fn download(&self, id: &str) -> Result<Vec<u8>> {
        let url = self.client.url(&format!("documents/{id}/download"));
        let response = self.client.send(self.client.http().get(url)).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: crate::client::error_message(status.as_u16(), &body),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with(PDF_MIME) {
            return Err(Error::InvalidContentType {
                expected: PDF_MIME.to_string(),
                got: content_type,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// `POST /documents/upload` — multipart upload of a PDF.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(PDF_MIME)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let request = self
            .client
            .http()
            .post(self.client.url("documents/upload"))
            .multipart(form);
        self.client.json(request).await
    }

    /// `PUT /documents/:id` — partial update (title, favorite flag).
    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<Document> {
        self.client
            .put_json(&format!("documents/{id}"), update)
            .await
    }

    /// `DELETE /documents/:id`.
    pub async fn delete(&self, id: &str) -> Result<ServerMessage> {
        self.client.delete_json(&format!("documents/{id}")).await
    }

    /// `POST /documents/ask` — ask the AI a question, optionally scoped to
    /// a single document.
    pub async fn ask(
        &self,
        question: impl Into<String>,
        document_id: Option<String>,
    ) -> Result<AskResponse> {
        let request = AskRequest {
            question: question.into(),
            document_id,
        };
        self.client.post_json("documents/ask", &request).await
    }
}
