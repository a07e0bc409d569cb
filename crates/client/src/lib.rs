//! Sportiva backend client
//!
//! Talks to the Supabase REST surfaces: GoTrue under `/auth/v1` for sessions
//! and PostgREST under `/rest/v1` for data. Whether a call needs a signed-in
//! user is enforced by the client type: [`PublicClient`] for the auth flows,
//! [`AuthenticatedClient`] for everything else.

pub mod auth;
pub mod error;
pub mod rest;
pub mod typed;

pub use auth::{AuthUser, Session, SignUpOutcome, SignUpRequest, TokenResponse};
pub use error::ClientError;
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};
