//! Gym management

use super::{authenticated, report};
use sportiva_core::{GymUser, ManagedGym, NewGym, RequestFailure};

#[derive(Clone, Default)]
pub struct GymService;

impl GymService {
    pub fn new() -> Self {
        Self
    }

    /// Gyms owned by a manager
    pub async fn gyms_by_manager(&self, user_id: &str) -> Result<Vec<ManagedGym>, RequestFailure> {
        authenticated()?
            .get_gyms_by_manager(user_id)
            .await
            .map_err(|e| report("get_gyms_by_manager", e))
    }

    /// Create a gym and return its id
    pub async fn create_gym(&self, gym: &NewGym) -> Result<String, RequestFailure> {
        let id = authenticated()?
            .create_gym(gym)
            .await
            .map_err(|e| report("create_gym", e))?;
        tracing::info!(gym_id = %id, "gym created");
        Ok(id)
    }

    /// Add a user to a gym with the given role
    pub async fn add_user_to_gym(&self, membership: &GymUser) -> Result<(), RequestFailure> {
        authenticated()?
            .add_user_to_gym(membership)
            .await
            .map_err(|e| report("add_user_to_gym", e))?;
        tracing::info!(
            user_id = %membership.user_id,
            gym_id = %membership.gym_id,
            role = %membership.role,
            "user added to gym"
        );
        Ok(())
    }
}
