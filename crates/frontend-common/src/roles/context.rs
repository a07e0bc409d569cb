//! Roles of the signed-in user

use crate::services::RoleService;
use crate::session::use_session;
use sportiva_core::{FetchGeneration, Roles};
use std::rc::Rc;
use yew::prelude::*;

/// Role data, tagged with the user it was fetched for
#[derive(Clone, Debug, PartialEq)]
pub struct RoleState {
    /// User the roles belong to; `None` once settled for a signed-out visitor
    pub owner: Option<String>,
    pub roles: Roles,
    pub is_loading: bool,
    /// Re-fetching for the same owner; `roles` stay valid meanwhile
    pub refreshing: bool,
    pub error: Option<String>,
}

impl Default for RoleState {
    fn default() -> Self {
        Self {
            owner: None,
            roles: Roles::new(),
            is_loading: true,
            refreshing: false,
            error: None,
        }
    }
}

impl RoleState {
    /// Settled role data for `owner`
    pub fn loaded(owner: Option<String>, roles: Roles) -> Self {
        Self {
            owner,
            roles,
            is_loading: false,
            refreshing: false,
            error: None,
        }
    }

    /// Whether role data is still unsettled for `user_id`
    ///
    /// Roles fetched for a different identity count as loading, so a freshly
    /// signed-in user is never judged by the previous user's roles.
    pub fn is_loading_for(&self, user_id: Option<&str>) -> bool {
        self.is_loading || self.owner.as_deref() != user_id
    }
}

pub enum RoleAction {
    Loading { owner: String },
    /// Re-fetch for the current owner, keeping the roles already known
    Refreshing,
    Loaded { owner: String, roles: Roles },
    Failed { owner: String, message: String },
    Clear,
}

impl Reducible for RoleState {
    type Action = RoleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RoleAction::Loading { owner } => Rc::new(Self {
                owner: Some(owner),
                ..Self::default()
            }),
            RoleAction::Refreshing => Rc::new(Self {
                refreshing: true,
                ..(*self).clone()
            }),
            RoleAction::Loaded { owner, roles } => Rc::new(Self::loaded(Some(owner), roles)),
            RoleAction::Failed { owner, message } => Rc::new(Self {
                error: Some(message),
                ..Self::loaded(Some(owner), Roles::new())
            }),
            RoleAction::Clear => Rc::new(Self::loaded(None, Roles::new())),
        }
    }
}

/// Role context: the role state plus a way to re-fetch it
#[derive(Clone, PartialEq)]
pub struct RoleContext {
    state: UseReducerHandle<RoleState>,
    refresh: Callback<()>,
}

impl RoleContext {
    pub fn new(state: UseReducerHandle<RoleState>, refresh: Callback<()>) -> Self {
        Self { state, refresh }
    }

    pub fn roles(&self) -> &Roles {
        &self.state.roles
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn state(&self) -> &RoleState {
        &self.state
    }

    pub fn is_loading_for(&self, user_id: Option<&str>) -> bool {
        self.state.is_loading_for(user_id)
    }

    /// Fetch the roles again, e.g. after registering for a new role
    pub fn refresh(&self) {
        self.refresh.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleProviderProps {
    pub children: Children,
}

/// Role provider; mount inside the session provider
#[function_component(RoleProvider)]
pub fn role_provider(props: &RoleProviderProps) -> Html {
    let session = use_session();
    let state = use_reducer(RoleState::default);
    let generation = use_memo((), |_| FetchGeneration::new());
    let refresh_count = use_state(|| 0u32);

    let user_id = session.user_id().map(str::to_string);
    let session_loading = session.is_loading;

    {
        let state = state.clone();
        use_effect_with(
            (user_id, session_loading, *refresh_count),
            move |(user_id, session_loading, _)| {
                if !*session_loading {
                    match user_id.clone() {
                        None => {
                            generation.invalidate();
                            state.dispatch(RoleAction::Clear);
                        }
                        Some(owner) => {
                            let ticket = generation.begin();
                            if state.owner.as_deref() == Some(owner.as_str()) && !state.is_loading {
                                state.dispatch(RoleAction::Refreshing);
                            } else {
                                state.dispatch(RoleAction::Loading {
                                    owner: owner.clone(),
                                });
                            }
                            wasm_bindgen_futures::spawn_local(async move {
                                let result = RoleService::new().session_with_roles().await;
                                let applied = ticket.apply(|| match result {
                                    Ok(session) => {
                                        tracing::debug!(
                                            user_id = %owner,
                                            roles = ?session.roles,
                                            "roles loaded"
                                        );
                                        state.dispatch(RoleAction::Loaded {
                                            owner,
                                            roles: session.roles,
                                        });
                                    }
                                    Err(failure) => {
                                        tracing::warn!(user_id = %owner, "failed to load roles: {failure}");
                                        state.dispatch(RoleAction::Failed {
                                            owner,
                                            message: failure.display_message(),
                                        });
                                    }
                                });
                                if !applied {
                                    tracing::debug!("discarded roles for a superseded identity");
                                }
                            });
                        }
                    }
                }

                move || generation.invalidate()
            },
        );
    }

    let refresh = {
        let refresh_count = refresh_count.clone();
        Callback::from(move |()| refresh_count.set(refresh_count.wrapping_add(1)))
    };

    let context = RoleContext::new(state, refresh);

    html! {
        <ContextProvider<RoleContext> context={context}>
            {props.children.clone()}
        </ContextProvider<RoleContext>>
    }
}

/// Hook to use the role context
#[hook]
pub fn use_roles() -> RoleContext {
    use_context::<RoleContext>()
        .expect("RoleContext not found. Make sure to wrap your component with RoleProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportiva_core::Role;

    fn member_u1() -> Rc<RoleState> {
        Rc::new(RoleState::loaded(Some("u1".into()), Roles::from([Role::Member])))
    }

    #[test]
    fn test_refresh_keeps_known_roles() {
        let state = member_u1().reduce(RoleAction::Refreshing);

        assert!(state.refreshing);
        assert!(!state.is_loading_for(Some("u1")));
        assert!(state.roles.contains(Role::Member));
    }

    #[test]
    fn test_refresh_result_replaces_roles() {
        let state = member_u1()
            .reduce(RoleAction::Refreshing)
            .reduce(RoleAction::Loaded {
                owner: "u1".into(),
                roles: Roles::from([Role::Member, Role::Trainer]),
            });

        assert!(!state.refreshing);
        assert!(state.roles.contains(Role::Trainer));
    }

    #[test]
    fn test_new_owner_starts_from_nothing() {
        let state = member_u1().reduce(RoleAction::Loading { owner: "u2".into() });

        assert!(state.roles.is_empty());
        assert!(state.is_loading_for(Some("u2")));
        assert!(state.is_loading_for(Some("u1")));
    }

    #[test]
    fn test_roles_of_previous_owner_count_as_loading() {
        let state = member_u1();
        assert!(state.is_loading_for(Some("u2")));
        assert!(state.is_loading_for(None));
        assert!(!state.is_loading_for(Some("u1")));
    }
}
