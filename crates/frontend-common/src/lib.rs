//! Shared building blocks for the Sportiva web UI
//!
//! The session and role providers are the single source of truth for who is
//! signed in and what they may see; everything else reads them through hooks.

pub mod access;
pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod navigation;
pub mod roles;
pub mod services;
pub mod session;

pub use access::{
    PermissionGate, ProtectedRoute, ProtectedRouteOptions, WithRoleAccess, use_protected_route,
};
pub use client::{create_authenticated_client, create_public_client};
pub use config::AppConfig;
pub use roles::{RoleContext, RoleProvider, use_roles};
pub use session::{SessionContext, SessionProvider, use_session};
