use super::latch::{SubmissionGuard, SubmissionLatch};
use crate::error::RequestFailure;
use std::fmt;
use std::future::Future;

/// Field values of one form
pub trait FormFields: Clone + Default + PartialEq + 'static {
    /// The values as they are sent: free text trimmed, secrets untouched
    #[must_use]
    fn submitted(&self) -> Self;
}

/// Fields plus submission status of one form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<F> {
    fields: F,
    submitting: bool,
    error: Option<String>,
}

/// Change to a [`FormState`]
pub enum FormEvent<F> {
    /// Edit the field values in place
    Edit(Box<dyn FnOnce(&mut F)>),
    Started,
    Succeeded {
        /// Clear the fields back to their defaults
        reset: bool,
    },
    Failed(RequestFailure),
}

impl<F> FormEvent<F> {
    pub fn edit(f: impl FnOnce(&mut F) + 'static) -> Self {
        Self::Edit(Box::new(f))
    }
}

impl<F> fmt::Debug for FormEvent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit(_) => f.write_str("Edit"),
            Self::Started => f.write_str("Started"),
            Self::Succeeded { reset } => f.debug_struct("Succeeded").field("reset", reset).finish(),
            Self::Failed(failure) => f.debug_tuple("Failed").field(failure).finish(),
        }
    }
}

impl<F: FormFields> FormState<F> {
    #[must_use]
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            submitting: false,
            error: None,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Whether a submission is in flight; the submit button is disabled meanwhile
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn apply(&mut self, event: FormEvent<F>) {
        match event {
            FormEvent::Edit(edit) => edit(&mut self.fields),
            FormEvent::Started => {
                self.submitting = true;
                self.error = None;
            }
            FormEvent::Succeeded { reset } => {
                self.submitting = false;
                if reset {
                    self.fields = F::default();
                }
            }
            FormEvent::Failed(failure) => {
                self.submitting = false;
                self.error = Some(failure.display_message());
            }
        }
    }
}

/// One submission of a form, from the click to the outcome
///
/// Holds the form's latch for its whole lifetime; the latch is released when
/// the submission is dropped, whether or not [`Submission::run`] completed.
pub struct Submission<F, D> {
    values: F,
    dispatch: D,
    _guard: SubmissionGuard,
}

impl<F, D> Submission<F, D>
where
    F: FormFields,
    D: Fn(FormEvent<F>),
{
    /// Start submitting `fields`; `None` while another submission is pending
    ///
    /// Dispatches [`FormEvent::Started`] before returning, so the form is
    /// marked as submitting before the request is even issued.
    pub fn begin(latch: &SubmissionLatch, fields: &F, dispatch: D) -> Option<Self> {
        let guard = latch.try_begin()?;
        dispatch(FormEvent::Started);
        Some(Self {
            values: fields.submitted(),
            dispatch,
            _guard: guard,
        })
    }

    /// The values that will be sent
    #[must_use]
    pub fn values(&self) -> &F {
        &self.values
    }

    /// Send the values through `request` and record the outcome
    ///
    /// `on_success` runs after the success is recorded; a failure only sets
    /// the form's error.
    pub async fn run<T, Req, Fut, S>(self, request: Req, reset: bool, on_success: S)
    where
        Req: FnOnce(F) -> Fut,
        Fut: Future<Output = Result<T, RequestFailure>>,
        S: FnOnce(T),
    {
        let Self {
            values,
            dispatch,
            _guard,
        } = self;
        match request(values).await {
            Ok(value) => {
                dispatch(FormEvent::Succeeded { reset });
                on_success(value);
            }
            Err(failure) => dispatch(FormEvent::Failed(failure)),
        }
    }
}
