//! Form fields and submission state

use sportiva_core::{FormEvent, FormFields, FormState, RequestFailure, Submission, SubmissionLatch};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct FormReducer<F>(FormState<F>);

impl<F: FormFields> Reducible for FormReducer<F> {
    type Action = FormEvent<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

/// Form hook handle
pub struct UseFormHandle<F: FormFields> {
    state: UseReducerHandle<FormReducer<F>>,
    latch: Rc<SubmissionLatch>,
}

impl<F: FormFields> Clone for UseFormHandle<F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            latch: Rc::clone(&self.latch),
        }
    }
}

impl<F: FormFields> UseFormHandle<F> {
    pub fn fields(&self) -> &F {
        self.state.0.fields()
    }

    /// Bind to the submit button's `disabled`
    pub fn is_submitting(&self) -> bool {
        self.state.0.is_submitting()
    }

    pub fn error(&self) -> Option<String> {
        self.state.0.error().map(str::to_string)
    }

    /// Callback writing an input's value into one field
    pub fn setter(&self, field: fn(&mut F) -> &mut String) -> Callback<String> {
        let state = self.state.clone();
        Callback::from(move |value: String| {
            state.dispatch(FormEvent::edit(move |fields| *field(fields) = value));
        })
    }

    pub fn edit(&self, f: impl FnOnce(&mut F) + 'static) {
        self.state.dispatch(FormEvent::edit(f));
    }

    /// Submit the trimmed fields through `request`
    ///
    /// Ignored while another submission of this form is pending. On success
    /// the fields are cleared when `reset` is set, then `on_success` runs; a
    /// failure is shown through [`UseFormHandle::error`] and keeps the fields.
    pub fn submit<T, Req, Fut, S>(&self, request: Req, reset: bool, on_success: S)
    where
        T: 'static,
        Req: FnOnce(F) -> Fut + 'static,
        Fut: Future<Output = Result<T, RequestFailure>> + 'static,
        S: FnOnce(T) + 'static,
    {
        let dispatcher = self.state.dispatcher();
        let dispatch = move |event: FormEvent<F>| dispatcher.dispatch(event);
        let Some(submission) = Submission::begin(&self.latch, self.fields(), dispatch) else {
            tracing::debug!("ignoring submit while another is pending");
            return;
        };
        wasm_bindgen_futures::spawn_local(submission.run(request, reset, on_success));
    }
}

#[hook]
pub fn use_form<F: FormFields>() -> UseFormHandle<F> {
    let state = use_reducer(|| FormReducer(FormState::new(F::default())));
    let latch = use_memo((), |_| SubmissionLatch::new());

    UseFormHandle { state, latch }
}
