use super::{FormFields, trimmed};
use crate::types::{GymUser, NewGym, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInDetails {
    pub email: String,
    pub password: String,
}

impl FormFields for SignInDetails {
    fn submitted(&self) -> Self {
        Self {
            email: trimmed(&self.email),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl FormFields for SignUpDetails {
    fn submitted(&self) -> Self {
        Self {
            first_name: trimmed(&self.first_name),
            last_name: trimmed(&self.last_name),
            email: trimmed(&self.email),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerRegistration {
    /// Years of experience, as typed
    pub experience: String,
    pub specialty: String,
}

impl FormFields for TrainerRegistration {
    fn submitted(&self) -> Self {
        Self {
            experience: trimmed(&self.experience),
            specialty: trimmed(&self.specialty),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GymManagerRegistration {
    pub gym_name: String,
    pub city: String,
}

impl FormFields for GymManagerRegistration {
    fn submitted(&self) -> Self {
        Self {
            gym_name: trimmed(&self.gym_name),
            city: trimmed(&self.city),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GymDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl GymDetails {
    #[must_use]
    pub fn into_new_gym(self, owner_user_id: impl Into<String>) -> NewGym {
        NewGym {
            name: self.name,
            address: self.address,
            phone: self.phone,
            owner_user_id: owner_user_id.into(),
        }
    }
}

impl FormFields for GymDetails {
    fn submitted(&self) -> Self {
        Self {
            name: trimmed(&self.name),
            address: trimmed(&self.address),
            phone: trimmed(&self.phone),
        }
    }
}

/// Who to add to which gym, and as what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymMembership {
    pub user_id: String,
    /// `None` until the manager picks a gym
    pub gym_id: Option<String>,
    pub role: Role,
}

impl Default for GymMembership {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            gym_id: None,
            role: Role::Member,
        }
    }
}

impl GymMembership {
    /// The association to insert, once a gym is known
    #[must_use]
    pub fn into_gym_user(self, added_by: impl Into<String>) -> Option<GymUser> {
        Some(GymUser {
            gym_id: self.gym_id?,
            user_id: self.user_id,
            role: self.role,
            added_by: added_by.into(),
        })
    }
}

impl FormFields for GymMembership {
    fn submitted(&self) -> Self {
        Self {
            user_id: trimmed(&self.user_id),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_sent_as_typed() {
        let details = SignInDetails {
            email: " ana@example.com ".into(),
            password: " secret ".into(),
        };
        let sent = details.submitted();
        assert_eq!(sent.email, "ana@example.com");
        assert_eq!(sent.password, " secret ");
    }

    #[test]
    fn test_gym_details_carry_owner() {
        let gym = GymDetails {
            name: " Iron Temple ".into(),
            address: "Main St 1".into(),
            phone: "555-0100".into(),
        }
        .submitted()
        .into_new_gym("u1");
        assert_eq!(gym.name, "Iron Temple");
        assert_eq!(gym.owner_user_id, "u1");
    }

    #[test]
    fn test_membership_needs_a_gym() {
        let membership = GymMembership {
            user_id: " u2 ".into(),
            ..GymMembership::default()
        };
        assert_eq!(membership.clone().into_gym_user("u1"), None);

        let row = GymMembership {
            gym_id: Some("g1".into()),
            ..membership
        }
        .submitted()
        .into_gym_user("u1")
        .unwrap();
        assert_eq!(row.user_id, "u2");
        assert_eq!(row.role, Role::Member);
        assert_eq!(row.added_by, "u1");
    }
}
