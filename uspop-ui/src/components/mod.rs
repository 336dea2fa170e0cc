//! UI Components
//!
//! Leptos components for the population view.

pub mod chart;
pub mod selector;
pub mod status;

pub use chart::PopulationChart;
pub use selector::TrendSelector;
pub use status::{ErrorScreen, LoadingScreen};
