//! Role-based access control for views
//!
//! These mirror the backend's row-level policies so users are not shown
//! screens they cannot use; they do not enforce anything themselves.

mod permission_gate;
mod protected_route;
mod role_access;

pub use permission_gate::{PermissionGate, PermissionGateProps};
pub use protected_route::{
    ProtectedRoute, ProtectedRouteOptions, route_snapshot, use_protected_route,
};
pub use role_access::{WithRoleAccess, WithRoleAccessProps};
