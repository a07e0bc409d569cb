//! Generation counters for discarding stale responses
//!
//! Every data-fetching view owns a [`FetchGeneration`]. Starting a fetch
//! issues a [`FetchTicket`]; the response may only be applied while the ticket
//! is still current. Starting a newer fetch or invalidating the generation
//! (unmount, identity change) makes all outstanding tickets stale.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    current: Rc<Cell<u64>>,
}

impl FetchGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any in flight
    #[must_use]
    pub fn begin(&self) -> FetchTicket {
        let issued = self.bump();
        FetchTicket {
            current: Rc::clone(&self.current),
            issued,
        }
    }

    /// Make every outstanding ticket stale without starting a fetch
    pub fn invalidate(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }
}

/// Proof that a fetch was started at a given generation
#[derive(Debug, Clone)]
pub struct FetchTicket {
    current: Rc<Cell<u64>>,
    issued: u64,
}

impl FetchTicket {
    /// Whether the response for this ticket may still be applied
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.get() == self.issued
    }

    /// Run `apply` only when the ticket is current; returns whether it ran
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_invalidate_discards_pending_response() {
        let generation = FetchGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();

        let mut applied = false;
        assert!(!ticket.apply(|| applied = true));
        assert!(!applied);
    }

    #[test]
    fn test_current_ticket_applies() {
        let generation = FetchGeneration::new();
        let ticket = generation.begin();

        let mut applied = false;
        assert!(ticket.apply(|| applied = true));
        assert!(applied);
    }
}
