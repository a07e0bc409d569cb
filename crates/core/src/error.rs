//! Failures surfaced to views and forms

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A request failure as presented to the user
///
/// Views never inspect transport details; they only need the text to render
/// inline. A failure either carries a human readable message or falls back to
/// [`GENERIC_FAILURE_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    #[error("{0}")]
    Message(String),

    #[error("Something went wrong. Please try again.")]
    Unspecified,
}

impl RequestFailure {
    /// Build a failure from an optional message; blank messages count as none
    pub fn from_message(message: Option<impl Into<String>>) -> Self {
        match message.map(Into::into) {
            Some(message) if !message.trim().is_empty() => Self::Message(message),
            _ => Self::Unspecified,
        }
    }

    /// The message carried by the failure, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Unspecified => None,
        }
    }

    /// Text to render for this failure
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message()
            .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_shown_verbatim() {
        let failure = RequestFailure::from_message(Some("duplicate"));
        assert_eq!(failure.display_message(), "duplicate");
        assert_eq!(failure.to_string(), "duplicate");
    }

    #[test]
    fn test_missing_or_blank_message_falls_back() {
        assert_eq!(
            RequestFailure::from_message(None::<String>).display_message(),
            GENERIC_FAILURE_MESSAGE
        );
        let blank = RequestFailure::from_message(Some("   "));
        assert_eq!(blank, RequestFailure::Unspecified);
        assert_eq!(blank.to_string(), GENERIC_FAILURE_MESSAGE);
    }
}
