//! Trend Selector
//!
//! Row of buttons choosing the trend window.

use leptos::*;
use uspop::TrendWindow;

use crate::state::PopulationState;

/// One button per trend window
#[component]
pub fn TrendSelector() -> impl IntoView {
    view! {
        <div class="mt-2 gap-4 flex flex-row">
            {TrendWindow::ALL
                .into_iter()
                .map(|window| view! { <TrendButton window=window /> })
                .collect_view()}
        </div>
    }
}

/// Trend window selection button
#[component]
fn TrendButton(window: TrendWindow) -> impl IntoView {
    let state = use_context::<PopulationState>().expect("PopulationState not found");

    let is_active = create_memo(move |_| state.view.with(|view| view.is_active(window)));

    // Local selection only; the fetched series is reused
    let on_click = move |_| state.view.update(|view| view.select(window));

    view! {
        <button
            on:click=on_click
            class=move || button_class(is_active.get())
        >
            {window.label()}
        </button>
    }
}

/// Classes for an active (secondary) or inactive (ghost) button
fn button_class(active: bool) -> String {
    let base = "px-4 py-2 rounded-md text-sm font-medium transition-colors";
    if active {
        format!("{} bg-gray-100 text-gray-900 hover:bg-gray-200", base)
    } else {
        format!("{} bg-transparent hover:bg-gray-100", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert!(button_class(true).contains("bg-gray-100 text-gray-900"));
        assert!(button_class(false).contains("bg-transparent"));
        assert_ne!(button_class(true), button_class(false));
    }
}
