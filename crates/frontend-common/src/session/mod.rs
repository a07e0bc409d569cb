//! Session provider

pub mod context;
pub mod expiry;

// Re-export commonly used items
pub use context::{
    SessionAction, SessionContext, SessionProvider, SessionState, now_unix, use_session,
    use_session_user,
};
