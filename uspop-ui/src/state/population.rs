//! Population View State
//!
//! Reactive wrapper around [`TrendView`] using Leptos signals.

use leptos::*;
use uspop::TrendView;

use crate::api;

/// View state provided to all components
#[derive(Clone, Copy)]
pub struct PopulationState {
    /// Fetched records, loading/error flags and the selected trend window
    pub view: RwSignal<TrendView>,
}

/// Provide population state to the component tree
pub fn provide_population_state() -> PopulationState {
    let state = PopulationState {
        view: create_rw_signal(TrendView::new()),
    };

    provide_context(state);
    state
}

/// Fetch the population series once and store the outcome.
///
/// Called a single time from the root component.
pub fn init_population_fetch(state: PopulationState) {
    spawn_local(async move {
        let result = api::fetch_population().await;

        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to fetch population data: {}", e).into());
        }

        state.view.update(|view| view.apply(result));
    });
}
