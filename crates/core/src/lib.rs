//! Sportiva core types and utilities
//!
//! Everything in this crate is platform-neutral: the Yew front-end and the
//! backend client both build on it, and it is unit tested natively.

pub mod access;
pub mod error;
pub mod fetch;
pub mod form;
pub mod types;

pub use access::{GateDecision, RoleRequirement, RouteAccess, RouteGuard, RouteSnapshot};
pub use error::{GENERIC_FAILURE_MESSAGE, RequestFailure};
pub use fetch::{FetchGeneration, FetchTicket};
pub use form::{FormEvent, FormFields, FormState, Submission, SubmissionGuard, SubmissionLatch};
pub use types::{
    Gym, GymUser, ManagedGym, NewGym, Role, Roles, SessionUser, SessionWithRoles, User, UserGym,
    UserName,
};
