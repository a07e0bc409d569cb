//! User data

use super::{authenticated, report};
use sportiva_core::{RequestFailure, UserGym, UserName};

#[derive(Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// First and last name of a user
    pub async fn user_name(&self, user_id: &str) -> Result<UserName, RequestFailure> {
        authenticated()?
            .get_user_name(user_id)
            .await
            .map_err(|e| report("get_user_name", e))
    }

    /// Gyms the user belongs to
    pub async fn user_gyms(&self, user_id: &str) -> Result<Vec<UserGym>, RequestFailure> {
        authenticated()?
            .get_user_gyms(user_id)
            .await
            .map_err(|e| report("get_user_gyms", e))
    }
}
