//! Data endpoints (PostgREST)
//!
//! Row-level security on the backend decides what each call may read or
//! write; these methods only shape requests and responses.

use super::{error::ClientError, typed::AuthenticatedClient};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use sportiva_core::{GymUser, ManagedGym, NewGym, Roles, SessionWithRoles, UserGym, UserName};

const PREFER: &str = "Prefer";
const RETURN_MINIMAL: &str = "return=minimal";
const RETURN_REPRESENTATION: &str = "return=representation";

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

#[derive(Deserialize)]
struct GymMembershipRow {
    gym_id: String,
    gyms: Option<GymSummary>,
}

#[derive(Deserialize)]
struct GymSummary {
    name: String,
    #[serde(default)]
    city: Option<String>,
}

#[derive(Deserialize)]
struct InsertedId {
    id: String,
}

#[derive(Serialize)]
struct RolesRpc<'a> {
    p_user_id: &'a str,
}

#[derive(Serialize)]
struct NewTrainer<'a> {
    user_id: &'a str,
    experience: &'a str,
    specialty: &'a str,
}

#[derive(Serialize)]
struct NewGymManager<'a> {
    user_id: &'a str,
    gym_name: &'a str,
    city: &'a str,
}

impl AuthenticatedClient {
    /// First and last name of a user
    pub async fn get_user_name(&self, user_id: &str) -> Result<UserName, ClientError> {
        let req = self
            .request(Method::GET, "/rest/v1/users")
            .query(&[("select", "first_name,last_name"), ("id", eq(user_id).as_str())]);
        let rows: Vec<UserName> = self.execute(req).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("user {user_id}")))
    }

    /// Gyms the user is a member of
    pub async fn get_user_gyms(&self, user_id: &str) -> Result<Vec<UserGym>, ClientError> {
        let req = self.request(Method::GET, "/rest/v1/gym_users").query(&[
            ("select", "gym_id,gyms(name,city)"),
            ("user_id", eq(user_id).as_str()),
        ]);
        let rows: Vec<GymMembershipRow> = self.execute(req).await?;

        // A membership whose gym is hidden by row-level security has no join
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                row.gyms.map(|gym| UserGym {
                    gym_id: row.gym_id,
                    gym_name: gym.name,
                    gym_city: gym.city,
                })
            })
            .collect())
    }

    /// Gyms owned by a manager
    pub async fn get_gyms_by_manager(&self, user_id: &str) -> Result<Vec<ManagedGym>, ClientError> {
        let req = self
            .request(Method::GET, "/rest/v1/gyms")
            .query(&[("select", "id,name,city"), ("owner_user_id", eq(user_id).as_str())]);
        self.execute(req).await
    }

    /// Current user and the roles the backend derives for it
    pub async fn get_user_session_with_roles(&self) -> Result<SessionWithRoles, ClientError> {
        let user = self.current_user().await?;
        let req = self
            .request(Method::POST, "/rest/v1/rpc/get_user_roles")
            .json(&RolesRpc { p_user_id: &user.id });
        let roles: Roles = self.execute(req).await?;
        Ok(SessionWithRoles {
            user_id: user.id,
            roles,
        })
    }

    /// Create the trainer record for a user
    pub async fn register_trainer(
        &self,
        user_id: &str,
        experience: &str,
        specialty: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/rest/v1/trainers")
            .header(PREFER, RETURN_MINIMAL)
            .json(&NewTrainer {
                user_id,
                experience,
                specialty,
            });
        self.execute_empty(req).await
    }

    /// Create the gym-manager record for a user
    pub async fn register_gym_manager(
        &self,
        user_id: &str,
        gym_name: &str,
        city: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/rest/v1/gym_managers")
            .header(PREFER, RETURN_MINIMAL)
            .json(&NewGymManager {
                user_id,
                gym_name,
                city,
            });
        self.execute_empty(req).await
    }

    /// Insert a gym and return its id
    pub async fn create_gym(&self, gym: &NewGym) -> Result<String, ClientError> {
        let req = self
            .request(Method::POST, "/rest/v1/gyms")
            .query(&[("select", "id")])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(gym);
        let rows: Vec<InsertedId> = self.execute(req).await?;
        rows.into_iter()
            .next()
            .map(|row| row.id)
            .ok_or_else(|| ClientError::Backend {
                status: 201,
                message: Some("Gym was created but no id was returned".to_string()),
            })
    }

    /// Link a user to a gym
    pub async fn add_user_to_gym(&self, membership: &GymUser) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/rest/v1/gym_users")
            .header(PREFER, RETURN_MINIMAL)
            .json(membership);
        self.execute_empty(req).await
    }
}
