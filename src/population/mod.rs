//! Population Data
//!
//! The record model for the population API, the nation filter and the
//! trend window selection.
//!
//! # Pipeline
//!
//! ```text
//!   JSON body → PopulationResponse → filter_nation → trend_slice
//! ```

mod error;
mod filter;
mod types;
mod window;

pub use error::{FetchError, FetchResult, InvalidTrendWindow};
pub use filter::{filter_nation, parse_population, DEFAULT_NATION};
pub use types::{PopulationRecord, PopulationResponse};
pub use window::{trend_slice, TrendWindow};

/// Tesseract endpoint serving yearly total population per nation
pub const POPULATION_ENDPOINT: &str = "https://honolulu-api.datausa.io/tesseract/data.jsonrecords?cube=pums_5&drilldowns=Nation,Year&measures=Total+Population";
