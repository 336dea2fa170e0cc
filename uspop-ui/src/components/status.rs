//! Status Screens
//!
//! Full-page placeholders shown instead of the chart.

use leptos::*;

/// Shown when the fetch failed
#[component]
pub fn ErrorScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-screen text-5xl">
            "Oops. Something went wrong"
        </div>
    }
}

/// Shown until the fetch resolves
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-screen text-5xl">
            "Loading..."
        </div>
    }
}
