//! Client-side role gating
//!
//! These rules mirror the row-level policies enforced by the backend; they
//! decide what to render and where to navigate, never what data is visible.

pub mod policy;
pub mod route;
pub mod sign_in;

pub use policy::{GateDecision, RoleRequirement};
pub use route::{
    REDIRECT_QUERY_PARAM, RouteAccess, RouteGuard, RouteSnapshot, login_redirect, return_path,
};
pub use sign_in::SignInForward;
