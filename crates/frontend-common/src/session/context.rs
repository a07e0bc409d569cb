//! Global session context and provider

use super::expiry;
use crate::client::set_auth_token;
use crate::config::AppConfig;
use gloo::storage::{SessionStorage, Storage};
use gloo::timers::callback::Interval;
use sportiva_client::Session;
use sportiva_core::SessionUser;
use std::rc::Rc;
use yew::prelude::*;

/// Current Unix time in seconds
pub fn now_unix() -> i64 {
    js_sys::Date::now() as i64 / 1000
}

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub is_loading: bool,
}

/// Session context actions
pub enum SessionAction {
    SignIn(Session),
    SignOut,
    SetLoading(bool),
    ValidateExpiry,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true, // Start with loading to check sessionStorage
        }
    }
}

impl SessionState {
    /// A settled state, signed in or not
    pub fn settled(session: Option<Session>) -> Self {
        Self {
            session,
            is_loading: false,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user().map(|user| user.id.as_str())
    }

    fn signed_out() -> Rc<Self> {
        if let Err(e) = set_auth_token(None) {
            tracing::warn!("failed to clear auth token: {e}");
        }
        SessionStorage::delete(AppConfig::SESSION_STORAGE_KEY);
        Rc::new(Self::settled(None))
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SignIn(session) => {
                if let Err(e) = set_auth_token(Some(&session.access_token)) {
                    tracing::error!("failed to install auth token: {e}");
                }
                if let Err(e) = SessionStorage::set(AppConfig::SESSION_STORAGE_KEY, &session) {
                    tracing::warn!("failed to persist session: {e}");
                }
                tracing::info!(user_id = %session.user.id, "signed in");
                Rc::new(Self::settled(Some(session)))
            }
            SessionAction::SignOut => {
                tracing::info!("signed out");
                Self::signed_out()
            }
            SessionAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
            SessionAction::ValidateExpiry => match &self.session {
                Some(session) if session.is_expired(now_unix()) => {
                    tracing::info!(user_id = %session.user.id, "session expired");
                    Self::signed_out()
                }
                _ => self,
            },
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component; mount once at the application root
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    // Sign out whenever the backend rejects the token
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let state = state.clone();
            expiry::set_expiry_handler(Rc::new(move || {
                tracing::info!("backend rejected the session token");
                state.dispatch(SessionAction::SignOut);
            }));

            // Cleanup on unmount
            move || {
                expiry::clear_expiry_handler();
            }
        });
    }

    // Restore a persisted session on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match SessionStorage::get::<Session>(AppConfig::SESSION_STORAGE_KEY) {
                Ok(session) if !session.is_expired(now_unix()) => {
                    tracing::debug!(user_id = %session.user.id, "restored session");
                    state.dispatch(SessionAction::SignIn(session));
                }
                Ok(_) => {
                    tracing::info!("discarding expired session");
                    state.dispatch(SessionAction::SignOut);
                }
                // No valid session found
                Err(_) => state.dispatch(SessionAction::SetLoading(false)),
            }
        });
    }

    // Periodic expiry check while signed in
    {
        let state = state.clone();
        let signed_in = state.session.is_some();
        use_effect_with(signed_in, move |signed_in| {
            let interval = signed_in.then(|| {
                Interval::new(AppConfig::SESSION_CHECK_INTERVAL_MS, move || {
                    state.dispatch(SessionAction::ValidateExpiry);
                })
            });

            // Dropping the interval cancels it
            move || drop(interval)
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the signed-in user
#[hook]
pub fn use_session_user() -> Option<SessionUser> {
    let session = use_session();
    session.user().cloned()
}
