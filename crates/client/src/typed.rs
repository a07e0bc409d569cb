//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = "sportiva-client/0.1.0";
const API_KEY_HEADER: &str = "apikey";

/// Client for the public auth endpoints; carries only the project's anon key
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

/// Client acting on behalf of a signed-in user
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

/// Send a request and decode a JSON body
async fn execute_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "backend rejected request");
        Err(ClientError::from_response(status, &body))
    }
}

/// Send a request whose success response carries no body worth decoding
async fn execute_empty(request: reqwest::RequestBuilder) -> Result<(), ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "backend rejected request");
        Err(ClientError::from_response(status, &body))
    }
}

impl PublicClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the anon key
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.anon_key)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Attach a user's access token to get an authenticated client
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            anon_key: self.anon_key,
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the anon key and the user's token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Execute a request that returns no content on success
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        execute_empty(request).await
    }

    /// Create a public client (useful for calling public endpoints)
    pub fn to_public(&self) -> PublicClient {
        PublicClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            anon_key: self.anon_key.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    anon_key: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the project's anon (publishable) key
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let anon_key = self
            .anon_key
            .ok_or_else(|| ClientError::Configuration("anon_key is required".into()))?;

        Ok(PublicClient {
            client: build_http_client(self.timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(access_token))
    }
}
