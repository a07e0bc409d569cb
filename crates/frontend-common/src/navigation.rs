//! Client-side navigation outside of router links

use yew_router::history::{BrowserHistory, History};

/// Push an in-app URL (path plus optional query) onto the browser history
///
/// The router listens to the same history, so this re-renders the matching
/// route without a page load.
pub fn navigate(target: &str) {
    BrowserHistory::new().push(target.to_string());
}
