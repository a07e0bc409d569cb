use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Allows at most one submission in flight per form
///
/// The latch is checked synchronously on submit, so a second click that lands
/// before the disabled button re-renders is still rejected.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLatch {
    pending: Rc<Cell<bool>>,
}

impl SubmissionLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch; `None` while another submission is pending
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmissionGuard> {
        if self.pending.replace(true) {
            return None;
        }
        Some(SubmissionGuard {
            pending: Rc::clone(&self.pending),
            on_release: None,
        })
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Held for the lifetime of one submission; releases the latch when dropped
pub struct SubmissionGuard {
    pending: Rc<Cell<bool>>,
    on_release: Option<Box<dyn FnOnce()>>,
}

impl SubmissionGuard {
    /// Run `f` when the submission ends, whatever its outcome
    #[must_use]
    pub fn on_release<F: FnOnce() + 'static>(mut self, f: F) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.pending.set(false);
        if let Some(f) = self.on_release.take() {
            f();
        }
    }
}

impl fmt::Debug for SubmissionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionGuard")
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submission_rejected_while_pending() {
        let latch = SubmissionLatch::new();
        let guard = latch.try_begin();
        assert!(guard.is_some());
        assert!(latch.is_pending());
        assert!(latch.try_begin().is_none());

        drop(guard);
        assert!(!latch.is_pending());
        assert!(latch.try_begin().is_some());
    }

    #[test]
    fn test_release_callback_runs_once_on_drop() {
        let latch = SubmissionLatch::new();
        let released = Rc::new(Cell::new(0));
        {
            let released = Rc::clone(&released);
            let _guard = latch
                .try_begin()
                .unwrap()
                .on_release(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
        assert!(!latch.is_pending());
    }
}
