//! Custom hooks for data views and forms

pub mod use_fetch;
pub mod use_form;

pub use use_fetch::{FetchState, UseFetchHandle, use_fetch};
pub use use_form::{UseFormHandle, use_form};
