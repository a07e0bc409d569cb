//! Authentication API service

use super::report;
use crate::client::{create_authenticated_client, create_public_client};
use crate::session::now_unix;
use sportiva_client::{Session, SignUpOutcome, SignUpRequest};
use sportiva_core::RequestFailure;

/// Result of creating an account
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpResult {
    /// The account is active and signed in
    SignedIn(Session),
    /// The user has to confirm their e-mail address first
    ConfirmationRequired,
}

/// Authentication API service
#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    /// Create a new auth service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    /// Sign in with e-mail and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, RequestFailure> {
        let client = create_public_client().map_err(|e| report("sign_in", e))?;
        let token = client
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| report("sign_in", e))?;
        Ok(token.into_session(now_unix()))
    }

    /// Create an account
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResult, RequestFailure> {
        let client = create_public_client().map_err(|e| report("sign_up", e))?;
        match client.sign_up(request).await.map_err(|e| report("sign_up", e))? {
            SignUpOutcome::SignedIn(token) => Ok(SignUpResult::SignedIn(token.into_session(now_unix()))),
            SignUpOutcome::ConfirmationRequired(user) => {
                tracing::info!(user_id = %user.id, "account created, awaiting confirmation");
                Ok(SignUpResult::ConfirmationRequired)
            }
        }
    }

    /// Revoke the current session on the backend
    ///
    /// Best effort: the local session is discarded whatever the outcome.
    pub async fn sign_out(&self) {
        match create_authenticated_client() {
            Ok(Some(client)) => {
                if let Err(e) = client.sign_out().await {
                    tracing::warn!("backend sign-out failed: {e}");
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to get client: {e}"),
        }
    }
}
