//! Client configuration and initialization

use crate::client_wrapper::WrappedAuthClient;
use crate::config::AppConfig;
pub use sportiva_client::ClientError;
use sportiva_client::{PublicClient, TypedClientBuilder};
use std::cell::RefCell;

thread_local! {
    /// Global client instances
    static PUBLIC_CLIENT: RefCell<Option<PublicClient>> = const { RefCell::new(None) };
    static AUTH_CLIENT: RefCell<Option<WrappedAuthClient>> = const { RefCell::new(None) };
}

fn builder() -> TypedClientBuilder {
    if AppConfig::SUPABASE_ANON_KEY.is_empty() {
        tracing::warn!("SPORTIVA_SUPABASE_ANON_KEY was not set at build time");
    }
    TypedClientBuilder::new()
        .base_url(AppConfig::supabase_url())
        .anon_key(AppConfig::SUPABASE_ANON_KEY)
}

/// Get the public client instance (for the sign-in and sign-up endpoints)
pub fn create_public_client() -> Result<PublicClient, ClientError> {
    PUBLIC_CLIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let client = builder().build_public()?;
        *slot = Some(client.clone());
        Ok(client)
    })
}

/// Get the authenticated client instance (returns None if not signed in)
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    Ok(AUTH_CLIENT.with(|cell| cell.borrow().clone()))
}

/// Install or clear the access token used by the authenticated client
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let client = match token {
        Some(token) => Some(WrappedAuthClient::new(
            create_public_client()?.authenticate(token),
        )),
        None => None,
    };
    AUTH_CLIENT.with(|cell| *cell.borrow_mut() = client);
    Ok(())
}
