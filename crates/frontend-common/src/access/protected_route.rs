use crate::config::AppConfig;
use crate::navigation::navigate;
use crate::roles::{RoleState, use_roles};
use crate::session::{SessionState, use_session};
use sportiva_core::{Role, Roles, RouteGuard, RouteSnapshot, SessionUser};
use yew::prelude::*;
use yew_router::prelude::*;

/// Options for [`use_protected_route`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedRouteOptions {
    /// The user needs at least one of these; empty means any signed-in user
    pub required_roles: Vec<Role>,
    pub redirect_to: String,
    pub should_redirect: bool,
}

impl Default for ProtectedRouteOptions {
    fn default() -> Self {
        Self {
            required_roles: Vec::new(),
            redirect_to: AppConfig::LOGIN_PATH.to_string(),
            should_redirect: true,
        }
    }
}

impl ProtectedRouteOptions {
    /// Options for a page open to any signed-in user
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn requiring(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            required_roles: roles.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = target.into();
        self
    }

    /// Report the outcome without navigating away
    pub fn without_redirect(mut self) -> Self {
        self.should_redirect = false;
        self
    }
}

/// What a protected page gets to know about its visitor
#[derive(Clone, Debug, PartialEq)]
pub struct ProtectedRoute {
    pub is_loading: bool,
    pub is_authorized: bool,
    pub user: Option<SessionUser>,
    pub roles: Roles,
}

/// Route snapshot for the current session and role data
pub fn route_snapshot<'a>(session: &'a SessionState, roles: &'a RoleState) -> RouteSnapshot<'a> {
    let user_id = session.user_id();
    RouteSnapshot {
        session_loading: session.is_loading,
        roles_loading: roles.is_loading_for(user_id),
        user_id,
        roles: &roles.roles,
    }
}

/// Guard the current page by session and roles
///
/// Once both session and roles have settled, a visitor without a session, or
/// without any of the required roles, is sent to
/// `redirect_to?redirectTo=<current path>` (once per identity). The result is
/// re-evaluated whenever the session or role data change.
#[hook]
pub fn use_protected_route(options: ProtectedRouteOptions) -> ProtectedRoute {
    let session = use_session();
    let roles = use_roles();
    let location = use_location();

    // Options are fixed for the lifetime of the page
    let guard = use_mut_ref(move || {
        RouteGuard::new(options.required_roles, options.redirect_to, options.should_redirect)
    });

    let session_state = (*session).clone();
    let role_state = roles.state().clone();
    let access = guard
        .borrow()
        .access(&route_snapshot(&session_state, &role_state));

    {
        let current_path = location
            .map(|location| location.path().to_string())
            .unwrap_or_else(|| "/".to_string());
        use_effect_with(
            (session_state.clone(), role_state.clone()),
            move |(session, roles)| {
                let redirect = guard
                    .borrow_mut()
                    .observe(&route_snapshot(session, roles), &current_path);
                if let Some(target) = redirect {
                    tracing::info!(
                        user_id = session.user_id().unwrap_or("anonymous"),
                        from = %current_path,
                        to = %target,
                        "access denied, redirecting"
                    );
                    navigate(&target);
                }
            },
        );
    }

    ProtectedRoute {
        is_loading: access.is_loading(),
        is_authorized: access.is_authorized(),
        user: session_state.user().cloned(),
        roles: role_state.roles,
    }
}
