//! Role lookup

use super::{authenticated, report};
use sportiva_core::{RequestFailure, SessionWithRoles};

#[derive(Clone, Default)]
pub struct RoleService;

impl RoleService {
    pub fn new() -> Self {
        Self
    }

    /// Current user together with the roles the backend grants it
    pub async fn session_with_roles(&self) -> Result<SessionWithRoles, RequestFailure> {
        authenticated()?
            .get_user_session_with_roles()
            .await
            .map_err(|e| report("get_user_session_with_roles", e))
    }
}
