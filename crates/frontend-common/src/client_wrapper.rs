//! Wrapped client that handles auth errors automatically

use sportiva_client::{AuthenticatedClient, ClientError};
use sportiva_core::{GymUser, ManagedGym, NewGym, SessionWithRoles, UserGym, UserName};

/// Wrapper around AuthenticatedClient that reports rejected sessions
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedClient,
}

impl WrappedAuthClient {
    /// Create a new wrapped client
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { inner: client }
    }

    fn check<T>(result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(error) = &result {
            if error.is_auth_expired() {
                // Trigger the global session expiry handler
                crate::session::expiry::notify_session_rejected();
            }
        }
        result
    }

    pub async fn get_user_name(&self, user_id: &str) -> Result<UserName, ClientError> {
        Self::check(self.inner.get_user_name(user_id).await)
    }

    pub async fn get_user_gyms(&self, user_id: &str) -> Result<Vec<UserGym>, ClientError> {
        Self::check(self.inner.get_user_gyms(user_id).await)
    }

    pub async fn get_gyms_by_manager(&self, user_id: &str) -> Result<Vec<ManagedGym>, ClientError> {
        Self::check(self.inner.get_gyms_by_manager(user_id).await)
    }

    pub async fn get_user_session_with_roles(&self) -> Result<SessionWithRoles, ClientError> {
        Self::check(self.inner.get_user_session_with_roles().await)
    }

    pub async fn register_trainer(
        &self,
        user_id: &str,
        experience: &str,
        specialty: &str,
    ) -> Result<(), ClientError> {
        Self::check(
            self.inner
                .register_trainer(user_id, experience, specialty)
                .await,
        )
    }

    pub async fn register_gym_manager(
        &self,
        user_id: &str,
        gym_name: &str,
        city: &str,
    ) -> Result<(), ClientError> {
        Self::check(
            self.inner
                .register_gym_manager(user_id, gym_name, city)
                .await,
        )
    }

    pub async fn create_gym(&self, gym: &NewGym) -> Result<String, ClientError> {
        Self::check(self.inner.create_gym(gym).await)
    }

    pub async fn add_user_to_gym(&self, membership: &GymUser) -> Result<(), ClientError> {
        Self::check(self.inner.add_user_to_gym(membership).await)
    }

    /// Revoke the session server-side; rejection is not reported since the
    /// session is being discarded anyway
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        self.inner.sign_out().await
    }
}
