use super::policy::RoleRequirement;
use crate::types::{Role, Roles};
use url::form_urlencoded;

/// Query parameter carrying the path to return to after signing in
pub const REDIRECT_QUERY_PARAM: &str = "redirectTo";

/// What the route guard sees at one point in time
#[derive(Debug, Clone, Copy)]
pub struct RouteSnapshot<'a> {
    pub session_loading: bool,
    pub roles_loading: bool,
    pub user_id: Option<&'a str>,
    pub roles: &'a Roles,
}

impl RouteSnapshot<'_> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session_loading || self.roles_loading
    }

    /// Authorized iff a user is present and holds at least one required role.
    /// An empty requirement only needs a user.
    #[must_use]
    pub fn access(&self, required_roles: &[Role]) -> RouteAccess {
        if self.is_loading() {
            return RouteAccess::Loading;
        }
        let holds_role =
            RoleRequirement::any_of(required_roles.iter().copied()).is_satisfied_by(self.roles);
        if self.user_id.is_some() && holds_role {
            RouteAccess::Authorized
        } else {
            RouteAccess::Unauthorized
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Loading,
    Authorized,
    Unauthorized,
}

impl RouteAccess {
    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    #[must_use]
    pub fn is_authorized(self) -> bool {
        self == Self::Authorized
    }
}

/// Reactive guard for a protected page
///
/// Fed a snapshot every time session or role data changes. It asks for a
/// redirect at most once per denied identity; becoming authorized, or a
/// different identity being denied, re-arms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    required_roles: Vec<Role>,
    redirect_to: String,
    should_redirect: bool,
    redirected_for: Option<Option<String>>,
}

impl RouteGuard {
    pub fn new(
        required_roles: impl IntoIterator<Item = Role>,
        redirect_to: impl Into<String>,
        should_redirect: bool,
    ) -> Self {
        Self {
            required_roles: required_roles.into_iter().collect(),
            redirect_to: redirect_to.into(),
            should_redirect,
            redirected_for: None,
        }
    }

    #[must_use]
    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    #[must_use]
    pub fn access(&self, snapshot: &RouteSnapshot<'_>) -> RouteAccess {
        snapshot.access(&self.required_roles)
    }

    /// Record a snapshot; returns the URL to navigate to when a redirect is due
    pub fn observe(&mut self, snapshot: &RouteSnapshot<'_>, current_path: &str) -> Option<String> {
        match self.access(snapshot) {
            RouteAccess::Loading => None,
            RouteAccess::Authorized => {
                self.redirected_for = None;
                None
            }
            RouteAccess::Unauthorized => {
                if !self.should_redirect {
                    return None;
                }
                let identity = snapshot.user_id.map(str::to_string);
                if self.redirected_for.as_ref() == Some(&identity) {
                    return None;
                }
                self.redirected_for = Some(identity);
                Some(login_redirect(&self.redirect_to, current_path))
            }
        }
    }
}

/// `redirect_to` with the current path appended as the return parameter
#[must_use]
pub fn login_redirect(redirect_to: &str, current_path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(current_path.as_bytes()).collect();
    // Slashes are legal in a query component; keep paths readable
    let encoded = encoded.replace("%2F", "/");
    let separator = if redirect_to.contains('?') { '&' } else { '?' };
    format!("{redirect_to}{separator}{REDIRECT_QUERY_PARAM}={encoded}")
}

/// In-app path to return to, read from a query string
///
/// Only absolute in-app paths are accepted so the parameter cannot send the
/// user to another origin.
#[must_use]
pub fn return_path(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|path| path.starts_with('/') && !path.starts_with("//") && !path.contains('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot<'a>(
        session_loading: bool,
        roles_loading: bool,
        user_id: Option<&'a str>,
        roles: &'a Roles,
    ) -> RouteSnapshot<'a> {
        RouteSnapshot {
            session_loading,
            roles_loading,
            user_id,
            roles,
        }
    }

    #[test]
    fn test_no_redirect_while_loading() {
        let none = Roles::new();
        let mut guard = RouteGuard::new([Role::Trainer], "/auth", true);

        for (session_loading, roles_loading) in [(true, false), (false, true), (true, true)] {
            let snap = snapshot(session_loading, roles_loading, None, &none);
            assert_eq!(guard.access(&snap), RouteAccess::Loading);
            assert_eq!(guard.observe(&snap, "/dashboard/trainer"), None);
        }
    }

    #[test]
    fn test_member_visiting_trainer_page_redirects_once() {
        let member = Roles::from([Role::Member]);
        let mut guard = RouteGuard::new([Role::Trainer], "/auth", true);
        let snap = snapshot(false, false, Some("u1"), &member);

        assert_eq!(guard.access(&snap), RouteAccess::Unauthorized);
        assert_eq!(
            guard.observe(&snap, "/dashboard/trainer").as_deref(),
            Some("/auth?redirectTo=/dashboard/trainer")
        );
        assert_eq!(guard.observe(&snap, "/dashboard/trainer"), None);
    }

    #[test]
    fn test_absent_user_redirects_even_without_required_roles() {
        let none = Roles::new();
        let mut guard = RouteGuard::new([], "/auth", true);
        let snap = snapshot(false, false, None, &none);

        assert_eq!(
            guard.observe(&snap, "/dashboard").as_deref(),
            Some("/auth?redirectTo=/dashboard")
        );
    }

    #[test]
    fn test_user_without_required_roles_is_authorized_for_open_page() {
        let none = Roles::new();
        let guard = RouteGuard::new([], "/auth", true);
        let snap = snapshot(false, false, Some("u1"), &none);
        assert_eq!(guard.access(&snap), RouteAccess::Authorized);
    }

    #[test]
    fn test_any_semantics_for_required_roles() {
        let trainer = Roles::from([Role::Trainer]);
        let guard = RouteGuard::new([Role::GymManager, Role::Trainer], "/auth", true);
        let snap = snapshot(false, false, Some("u1"), &trainer);
        assert_eq!(guard.access(&snap), RouteAccess::Authorized);
    }

    #[test]
    fn test_should_redirect_false_only_reports() {
        let member = Roles::from([Role::Member]);
        let mut guard = RouteGuard::new([Role::GymManager], "/auth", false);
        let snap = snapshot(false, false, Some("u1"), &member);

        assert_eq!(guard.access(&snap), RouteAccess::Unauthorized);
        assert_eq!(guard.observe(&snap, "/gym"), None);
    }

    #[test]
    fn test_role_change_after_mount_rechecks() {
        let mut guard = RouteGuard::new([Role::Trainer], "/auth", true);

        let trainer = Roles::from([Role::Trainer]);
        let snap = snapshot(false, false, Some("u1"), &trainer);
        assert_eq!(guard.observe(&snap, "/dashboard/trainer"), None);

        // Role revoked while the page is open
        let member = Roles::from([Role::Member]);
        let snap = snapshot(false, false, Some("u1"), &member);
        assert!(guard.observe(&snap, "/dashboard/trainer").is_some());

        // Regained, then lost again: the guard fires again
        let snap = snapshot(false, false, Some("u1"), &trainer);
        assert_eq!(guard.observe(&snap, "/dashboard/trainer"), None);
        let snap = snapshot(false, false, Some("u1"), &member);
        assert!(guard.observe(&snap, "/dashboard/trainer").is_some());
    }

    #[test]
    fn test_identity_change_rearms() {
        let none = Roles::new();
        let mut guard = RouteGuard::new([Role::Trainer], "/auth", true);

        let first = snapshot(false, false, Some("u1"), &none);
        let second = snapshot(false, false, Some("u2"), &none);

        assert!(guard.observe(&first, "/x").is_some());
        assert!(guard.observe(&second, "/x").is_some());
        assert!(guard.observe(&second, "/x").is_none());
    }

    #[test]
    fn test_login_redirect_encoding() {
        assert_eq!(
            login_redirect("/auth", "/dashboard/roles/add"),
            "/auth?redirectTo=/dashboard/roles/add"
        );
        assert_eq!(
            login_redirect("/auth?mode=signin", "/gym"),
            "/auth?mode=signin&redirectTo=/gym"
        );
        assert_eq!(login_redirect("/auth", "/a b&c"), "/auth?redirectTo=/a+b%26c");
    }

    #[test]
    fn test_return_path() {
        assert_eq!(
            return_path("?redirectTo=/dashboard/trainer").as_deref(),
            Some("/dashboard/trainer")
        );
        assert_eq!(return_path("redirectTo=%2Fgym").as_deref(), Some("/gym"));
        assert_eq!(return_path("redirectTo=https://evil.example"), None);
        assert_eq!(return_path("redirectTo=//evil.example"), None);
        assert_eq!(return_path("other=1"), None);
        assert_eq!(return_path(""), None);
    }
}
