//! Backend request functions used by the views
//!
//! Every function resolves to a [`RequestFailure`] on error so views only
//! deal with a displayable message.

pub mod auth;
pub mod gym;
pub mod registration;
pub mod roles;
pub mod user;

pub use auth::AuthService;
pub use gym::GymService;
pub use registration::RegistrationService;
pub use roles::RoleService;
pub use user::UserService;

use crate::client::create_authenticated_client;
use crate::client_wrapper::WrappedAuthClient;
use sportiva_core::RequestFailure;

/// The authenticated client, or a failure telling the user to sign in
pub(crate) fn authenticated() -> Result<WrappedAuthClient, RequestFailure> {
    match create_authenticated_client() {
        Ok(Some(client)) => Ok(client),
        Ok(None) => Err(RequestFailure::Message(
            "You need to sign in to do that.".to_string(),
        )),
        Err(e) => {
            tracing::error!("failed to get client: {e}");
            Err(e.into())
        }
    }
}

/// Log a failed request and convert it for display
pub(crate) fn report(operation: &'static str, error: sportiva_client::ClientError) -> RequestFailure {
    if error.is_auth_expired() {
        tracing::info!(operation, "request rejected: session expired");
    } else {
        tracing::warn!(operation, "request failed: {error}");
    }
    error.into()
}
