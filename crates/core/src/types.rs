//! Domain records shared by the client and the front-end

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identity record owned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_trainer: bool,
    #[serde(default)]
    pub is_gymmanager: bool,
}

/// Permission category a user may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Member,
    Trainer,
    GymManager,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Role; 3] = [Role::Member, Role::Trainer, Role::GymManager];

    /// Wire name, as stored by the backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Trainer => "Trainer",
            Role::GymManager => "GymManager",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Trainer => "Trainer",
            Role::GymManager => "Gym Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The set of roles held by one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roles(BTreeSet<Role>);

impl Roles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for Roles {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Role; N]> for Roles {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

/// Authenticated user as seen by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Current user together with the roles derived for it server-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWithRoles {
    pub user_id: String,
    pub roles: Roles,
}

/// Display name of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub first_name: String,
    pub last_name: String,
}

impl UserName {
    /// "First Last", skipping blank parts
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A gym the user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGym {
    pub gym_id: String,
    pub gym_name: String,
    #[serde(default)]
    pub gym_city: Option<String>,
}

/// A gym owned by a manager, as listed on the manager view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedGym {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Full gym record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gym {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    pub address: String,
    pub phone: String,
    pub owner_user_id: String,
}

/// Insert payload for a gym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGym {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub owner_user_id: String,
}

/// Association between a user and a gym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymUser {
    pub user_id: String,
    pub gym_id: String,
    pub role: Role,
    pub added_by: String,
}
