//! Auth endpoints.
//!
//! Login and signup are the only calls made without a token; the pipeline
//! simply finds no stored token to attach. Persisting the session from a
//! successful [`AuthResponse`] is the UI layer's job, so that auth state
//! and storage change together.

use crate::client::Client;
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, ServerMessage, SignupRequest};

/// Auth API accessor.
#[derive(Debug)]
pub struct AuthApi<'a> {
    pub(crate) client: &'a Client,
}

impl AuthApi<'_> {
    /// `POST /auth/login` — exchange credentials for a token and profile.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        self.client.post_json("auth/login", &request).await
    }

    /// `POST /auth/signup` — create an account. The server answers with a
    /// confirmation message; the user still logs in afterwards.
    pub async fn signup(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<ServerMessage> {
        let request = SignupRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        };
        self.client.post_json("auth/signup", &request).await
    }
}
