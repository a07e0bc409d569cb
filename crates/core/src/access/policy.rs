use crate::types::{Role, Roles};

/// Outcome of evaluating a [`RoleRequirement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Role data has not settled; render nothing
    Pending,
    Allow,
    Deny,
}

/// Roles a viewer must hold, either all of them or at least one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRequirement {
    roles: Vec<Role>,
    require_all: bool,
}

impl RoleRequirement {
    /// Requirement satisfied by holding any one of `roles`
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            require_all: false,
        }
    }

    /// Requirement satisfied only by holding every one of `roles`
    pub fn all_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            require_all: true,
        }
    }

    pub fn new(roles: impl IntoIterator<Item = Role>, require_all: bool) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            require_all,
        }
    }

    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    #[must_use]
    pub fn require_all(&self) -> bool {
        self.require_all
    }

    /// An empty requirement places no restriction
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.roles.is_empty()
    }

    #[must_use]
    pub fn is_satisfied_by(&self, held: &Roles) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        if self.require_all {
            self.roles.iter().all(|role| held.contains(*role))
        } else {
            self.roles.iter().any(|role| held.contains(*role))
        }
    }

    /// Decision for a gate; loading always wins over the role check
    #[must_use]
    pub fn decide(&self, held: &Roles, loading: bool) -> GateDecision {
        if loading {
            GateDecision::Pending
        } else if self.is_satisfied_by(held) {
            GateDecision::Allow
        } else {
            GateDecision::Deny
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_role_sets() -> Vec<Roles> {
        (0u8..8)
            .map(|mask| {
                Role::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, role)| role)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_require_all_is_subset() {
        for held in all_role_sets() {
            for required in all_role_sets() {
                let requirement = RoleRequirement::all_of(required.iter());
                let subset = required.iter().all(|role| held.contains(role));
                assert_eq!(
                    requirement.is_satisfied_by(&held),
                    subset,
                    "held={held:?} required={required:?}"
                );
            }
        }
    }

    #[test]
    fn test_require_any_is_intersection() {
        for held in all_role_sets() {
            for required in all_role_sets().into_iter().filter(|r| !r.is_empty()) {
                let requirement = RoleRequirement::any_of(required.iter());
                let intersects = required.iter().any(|role| held.contains(role));
                assert_eq!(
                    requirement.is_satisfied_by(&held),
                    intersects,
                    "held={held:?} required={required:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_requirement_always_allows() {
        for held in all_role_sets() {
            assert_eq!(
                RoleRequirement::all_of([]).decide(&held, false),
                GateDecision::Allow
            );
            assert_eq!(
                RoleRequirement::any_of([]).decide(&held, false),
                GateDecision::Allow
            );
        }
    }

    #[test]
    fn test_loading_is_pending_not_deny() {
        let member = Roles::from([Role::Member]);
        for requirement in [
            RoleRequirement::any_of([Role::Trainer]),
            RoleRequirement::all_of([Role::Member]),
            RoleRequirement::any_of([]),
        ] {
            assert_eq!(requirement.decide(&member, true), GateDecision::Pending);
            assert_eq!(requirement.decide(&Roles::new(), true), GateDecision::Pending);
        }
    }

    #[test]
    fn test_mixed_roles() {
        let held = Roles::from([Role::Member, Role::Trainer]);
        assert_eq!(
            RoleRequirement::all_of([Role::Member, Role::GymManager]).decide(&held, false),
            GateDecision::Deny
        );
        assert_eq!(
            RoleRequirement::any_of([Role::Member, Role::GymManager]).decide(&held, false),
            GateDecision::Allow
        );
    }
}
