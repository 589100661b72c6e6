//! # HTTP client and request pipeline
//!
//! [`Client`] owns the base URL and the underlying `reqwest` client, and
//! funnels every API call through [`Client::send`]:
//!
//! 1. the persisted token, when present, is attached as `x-auth-token`;
//! 2. the request is sent;
//! 3. a `401` clears the session, redirects the browser to `/login`
//!    (unless it is already there), and returns [`Error::Unauthorized`];
//! 4. any other non-success status becomes [`Error::Api`] carrying the
//!    server's `message`/`msg` body field when it parses, the raw body
//!    otherwise.
//!
//! The pipeline never retries. Endpoint groups ([`crate::auth::AuthApi`],
//! [`crate::documents::DocumentsApi`]) are borrowed accessors so one
//! `Client` can be cloned freely through the component tree.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::AuthApi;
use crate::documents::DocumentsApi;
use crate::error::{Error, Result};

/// Header the backend expects the token in.
pub const AUTH_HEADER: &str = "x-auth-token";

/// HTTP client for the DeepSearch backend.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for an absolute base URL, e.g.
    /// `https://deepsearch.example.com/api`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        // `Url::join` drops the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client from the app configuration, resolving a relative
    /// base URL (`"/api"`) against the current origin.
    pub fn from_config(config: &store::AppConfig) -> Result<Self> {
        Self::new(resolve_base_url(&config.api.base_url))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Access the auth endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    /// Access the document endpoints.
    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi { client: self }
    }

    pub(crate) fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a request through the pipeline. See the module docs for the
    /// 401 semantics.
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match store::default_session().token() {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        };

        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(401, &body);
            tracing::warn!("unauthorized response, clearing session");
            expire_session();
            return Err(Error::Unauthorized(message));
        }

        Ok(response)
    }

    /// Send and decode a JSON body, mapping error statuses.
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            })
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.json(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.json(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.json(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.json(self.http.delete(self.url(path))).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors as `{ "message": ... }`, with a few routes
/// using `{ "msg": ... }`. Non-JSON bodies are passed through as-is.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

/// Drop the local session after the server rejected the token, then send
/// the browser back to the login page.
fn expire_session() {
    store::default_session().clear();

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let at_login = window
                .location()
                .pathname()
                .map(|path| path == "/login")
                .unwrap_or(false);
            // Never redirect the login page onto itself.
            if !at_login {
                let _ = window.location().set_href("/login");
            }
        }
    }
}

/// Resolve a possibly-relative base URL against the current origin.
fn resolve_base_url(raw: &str) -> String {
    if !raw.starts_with('/') {
        return raw.to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{origin}{raw}");
            }
        }
    }

    // Native builds and tests have no window to resolve against.
    format!("http://localhost:8080{raw}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let client = Client::new("https://deepsearch.test/api").unwrap();
        assert_eq!(client.base_url().as_str(), "https://deepsearch.test/api/");
    }

    #[test]
    fn url_joins_keep_the_api_prefix() {
        let client = Client::new("https://deepsearch.test/api").unwrap();
        assert_eq!(
            client.url("documents").as_str(),
            "https://deepsearch.test/api/documents"
        );
        assert_eq!(
            client.url("documents/abc/download").as_str(),
            "https://deepsearch.test/api/documents/abc/download"
        );
        assert_eq!(
            client.url("auth/login").as_str(),
            "https://deepsearch.test/api/auth/login"
        );
    }

    #[test]
    fn relative_base_url_is_resolved() {
        let resolved = resolve_base_url("/api");
        assert!(resolved.ends_with("/api"));
        assert!(resolved.starts_with("http"));

        assert_eq!(
            resolve_base_url("https://deepsearch.test/api"),
            "https://deepsearch.test/api"
        );
    }

    #[test]
    fn error_message_prefers_the_message_field() {
        assert_eq!(
            error_message(400, r#"{ "message": "Invalid credentials" }"#),
            "Invalid credentials"
        );
        assert_eq!(error_message(401, r#"{ "msg": "No token" }"#), "No token");
    }

    #[test]
    fn error_message_falls_back_to_the_body_then_the_status() {
        assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(500, ""), "Request failed with status 500");
        // JSON without a known key falls through to the raw body.
        assert_eq!(error_message(422, r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
    }
}
