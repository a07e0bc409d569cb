//! Role provider

pub mod context;

pub use context::{RoleAction, RoleContext, RoleProvider, RoleState, use_roles};
