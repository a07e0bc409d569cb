//! Global hook for sessions the backend has rejected
//!
//! Authenticated requests report a `401` here so the session provider can
//! sign the user out without every view checking for it.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static ON_SESSION_REJECTED: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Install the handler run when the backend rejects the session token
pub fn set_expiry_handler(handler: Rc<dyn Fn()>) {
    ON_SESSION_REJECTED.with(|slot| {
        *slot.borrow_mut() = Some(handler);
    });
}

pub fn clear_expiry_handler() {
    ON_SESSION_REJECTED.with(|slot| {
        *slot.borrow_mut() = None;
    });
}

pub fn notify_session_rejected() {
    // Clone out first so the handler may replace itself
    let handler = ON_SESSION_REJECTED.with(|slot| slot.borrow().clone());
    if let Some(handler) = handler {
        handler();
    }
}
