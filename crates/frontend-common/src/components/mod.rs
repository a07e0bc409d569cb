mod access_denied;
mod inline_error;
mod skeleton;
mod spinner;

pub use access_denied::AccessDenied;
pub use inline_error::InlineError;
pub use skeleton::{CardSkeleton, ListSkeleton, PageSkeleton};
pub use spinner::{Spinner, SpinnerProps};
