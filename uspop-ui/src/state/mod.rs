//! State Management
//!
//! Population view state and its one-time fetch.

pub mod population;

pub use population::{init_population_fetch, provide_population_state, PopulationState};
