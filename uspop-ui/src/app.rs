//! App Root Component
//!
//! Chooses between the error, loading and trend screens.

use leptos::*;
use uspop::Screen;

use crate::components::{ErrorScreen, LoadingScreen, PopulationChart, TrendSelector};
use crate::state::{init_population_fetch, provide_population_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_population_state();

    // Single fetch per page load
    init_population_fetch(state);

    let screen = create_memo(move |_| state.view.with(|view| view.screen()));

    move || match screen.get() {
        Screen::Error => view! { <ErrorScreen /> }.into_view(),
        Screen::Loading => view! { <LoadingScreen /> }.into_view(),
        Screen::Data => view! { <TrendPage /> }.into_view(),
    }
}

/// Title, window selector and chart
#[component]
fn TrendPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center h-screen w-screen p-10 sm:p-32">
            <div class="font-bold text-4xl text-center">"Development of the US population"</div>

            <div class="mt-4 text-sm">"Select the length of the trend line:"</div>
            <TrendSelector />

            <PopulationChart />
        </div>
    }
}
