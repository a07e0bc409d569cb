//! Role registration

use super::{authenticated, report};
use sportiva_core::RequestFailure;

#[derive(Clone, Default)]
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        Self
    }

    pub async fn register_trainer(
        &self,
        user_id: &str,
        experience: &str,
        specialty: &str,
    ) -> Result<(), RequestFailure> {
        authenticated()?
            .register_trainer(user_id, experience, specialty)
            .await
            .map_err(|e| report("register_trainer", e))?;
        tracing::info!(user_id, "registered as trainer");
        Ok(())
    }

    pub async fn register_gym_manager(
        &self,
        user_id: &str,
        gym_name: &str,
        city: &str,
    ) -> Result<(), RequestFailure> {
        authenticated()?
            .register_gym_manager(user_id, gym_name, city)
            .await
            .map_err(|e| report("register_gym_manager", e))?;
        tracing::info!(user_id, "registered as gym manager");
        Ok(())
    }
}
