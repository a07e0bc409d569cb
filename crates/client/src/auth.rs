//! Session endpoints (GoTrue)

use super::{
    error::ClientError,
    typed::{AuthenticatedClient, PublicClient},
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use sportiva_core::SessionUser;

/// User object returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// Successful password grant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    /// Turn the grant into a session; `now` is the current Unix time in seconds
    pub fn into_session(self, now: i64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: SessionUser {
                id: self.user.id,
                email: self.user.email,
            },
        }
    }
}

/// Client-side session, persisted by the front-end between reloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Unix timestamp
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    /// Whether the session is past its expiry at `now` (Unix seconds)
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Sign-up form payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Result of a sign-up
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// The project auto-confirms accounts; the user is signed in
    SignedIn(TokenResponse),
    /// A confirmation e-mail was sent
    ConfirmationRequired(AuthUser),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(AuthUser),
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    first_name: &'a str,
    last_name: &'a str,
}

/// Auth endpoints for the public client
impl PublicClient {
    /// Sign in with e-mail and password
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials { email, password });
        self.execute(req).await
    }

    /// Create an account
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, ClientError> {
        let req = self.request(Method::POST, "/auth/v1/signup").json(&SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                first_name: &request.first_name,
                last_name: &request.last_name,
            },
        });
        let outcome = match self.execute::<SignUpResponse>(req).await? {
            SignUpResponse::Session(token) => SignUpOutcome::SignedIn(token),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationRequired(user),
        };
        Ok(outcome)
    }
}

/// Auth endpoints for the authenticated client
impl AuthenticatedClient {
    /// User the access token belongs to
    pub async fn current_user(&self) -> Result<AuthUser, ClientError> {
        let req = self.request(Method::GET, "/auth/v1/user");
        self.execute(req).await
    }

    /// Revoke the session server-side
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        let req = self.request(Method::POST, "/auth/v1/logout");
        self.execute_empty(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_at: Option<i64>, expires_in: Option<i64>) -> TokenResponse {
        TokenResponse {
            access_token: "jwt".into(),
            refresh_token: None,
            expires_in,
            expires_at,
            user: AuthUser {
                id: "u1".into(),
                email: Some("a@b.c".into()),
                user_metadata: serde_json::Value::Null,
            },
        }
    }

    #[test]
    fn test_session_prefers_absolute_expiry() {
        let session = token(Some(500), Some(3600)).into_session(100);
        assert_eq!(session.expires_at, Some(500));
        assert!(session.is_expired(500));
        assert!(!session.is_expired(499));
    }

    #[test]
    fn test_session_from_relative_expiry() {
        let session = token(None, Some(3600)).into_session(100);
        assert_eq!(session.expires_at, Some(3700));
        assert_eq!(session.user.id, "u1");
    }

    #[test]
    fn test_session_without_expiry_never_expires() {
        let session = token(None, None).into_session(100);
        assert!(!session.is_expired(i64::MAX));
    }
}
