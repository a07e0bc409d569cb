//! Submission bookkeeping for the create/register forms
//!
//! A form keeps its field values in a [`FormState`]. Submitting claims the
//! form's [`SubmissionLatch`], marks the state as submitting, and reports the
//! outcome back as a [`FormEvent`]. A failure keeps the fields as typed; a
//! success may reset them.

mod fields;
mod latch;
mod state;

pub use fields::{
    GymDetails, GymManagerRegistration, GymMembership, SignInDetails, SignUpDetails,
    TrainerRegistration,
};
pub use latch::{SubmissionGuard, SubmissionLatch};
pub use state::{FormEvent, FormFields, FormState, Submission};

/// Trimmed copy of a form field value
#[must_use]
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed("  Crossfit \n"), "Crossfit");
    }
}
