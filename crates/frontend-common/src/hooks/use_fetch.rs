//! Generation-guarded data loading

use sportiva_core::{FetchGeneration, RequestFailure};
use std::future::Future;
use yew::prelude::*;

/// Progress of a data fetch
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Fetch hook handle
pub struct UseFetchHandle<T> {
    state: UseStateHandle<FetchState<T>>,
    reload: Callback<()>,
}

impl<T> Clone for UseFetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reload: self.reload.clone(),
        }
    }
}

impl<T> UseFetchHandle<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Fetch again with the same inputs
    pub fn reload(&self) {
        self.reload.emit(());
    }

    pub fn reload_callback(&self) -> Callback<()> {
        self.reload.clone()
    }
}

/// Run `fetch` whenever `deps` change and track its result
///
/// Only the response of the latest fetch is applied; responses arriving after
/// a newer fetch started, or after the component unmounted, are dropped.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> UseFetchHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, RequestFailure>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let generation = use_memo((), |_| FetchGeneration::new());
    let reload_count = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with((deps, *reload_count), move |(deps, _)| {
            let ticket = generation.begin();
            state.set(FetchState::Loading);

            let request = fetch(deps.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let next = match request.await {
                    Ok(value) => FetchState::Loaded(value),
                    Err(failure) => FetchState::Failed(failure.display_message()),
                };
                if !ticket.apply(|| state.set(next)) {
                    tracing::debug!("discarded stale response");
                }
            });

            move || generation.invalidate()
        });
    }

    let reload = Callback::from(move |()| reload_count.set(reload_count.wrapping_add(1)));

    UseFetchHandle { state, reload }
}
