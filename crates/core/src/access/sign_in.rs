use super::route::return_path;

/// Decides where the sign-in page sends its visitor
///
/// Only a sign-in completed on the page honours the `redirectTo` parameter.
/// A visitor who is already signed in when the session settles was most
/// likely bounced here by a page they may not see, so they go to `home`
/// instead of back to that page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForward {
    arrived_signed_in: Option<bool>,
    forwarded: bool,
}

impl SignInForward {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current session state; returns the path to navigate to, once
    pub fn observe(
        &mut self,
        session_loading: bool,
        signed_in: bool,
        query: &str,
        home: &str,
    ) -> Option<String> {
        if session_loading || self.forwarded {
            return None;
        }
        let target = match self.arrived_signed_in {
            None => {
                self.arrived_signed_in = Some(signed_in);
                signed_in.then(|| home.to_string())
            }
            Some(false) if signed_in => {
                Some(return_path(query).unwrap_or_else(|| home.to_string()))
            }
            Some(_) => None,
        };
        self.forwarded = target.is_some();
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "?redirectTo=/dashboard/trainer";

    #[test]
    fn test_fresh_sign_in_returns_to_requested_page() {
        let mut forward = SignInForward::new();
        assert_eq!(forward.observe(true, false, QUERY, "/dashboard"), None);
        assert_eq!(forward.observe(false, false, QUERY, "/dashboard"), None);
        assert_eq!(
            forward.observe(false, true, QUERY, "/dashboard").as_deref(),
            Some("/dashboard/trainer")
        );
        assert_eq!(forward.observe(false, true, QUERY, "/dashboard"), None);
    }

    #[test]
    fn test_already_signed_in_goes_home() {
        let mut forward = SignInForward::new();
        assert_eq!(
            forward.observe(false, true, QUERY, "/dashboard").as_deref(),
            Some("/dashboard")
        );
        assert_eq!(forward.observe(false, true, QUERY, "/dashboard"), None);
    }

    #[test]
    fn test_restored_session_counts_as_arrival() {
        let mut forward = SignInForward::new();
        assert_eq!(forward.observe(true, false, QUERY, "/dashboard"), None);
        assert_eq!(
            forward.observe(false, true, QUERY, "/dashboard").as_deref(),
            Some("/dashboard")
        );
    }

    #[test]
    fn test_unsafe_return_path_goes_home() {
        let mut forward = SignInForward::new();
        forward.observe(false, false, "?redirectTo=//evil.example", "/dashboard");
        assert_eq!(
            forward
                .observe(false, true, "?redirectTo=//evil.example", "/dashboard")
                .as_deref(),
            Some("/dashboard")
        );
    }
}
