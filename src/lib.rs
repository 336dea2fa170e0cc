//! # uspop
//!
//! US Population Trend - fetches yearly United States population figures
//! from the Data USA tesseract API and shows the most recent 3, 5 or 10
//! years as a line chart.
//!
//! ## Pipeline
//!
//! ```text
//!   fetch (once) → filter nation → slice trend window → render
//! ```
//!
//! ## Modules
//!
//! - [`population`]: Record model, nation filter and trend window
//! - [`chart`]: Axis domain, ticks, scales and the monotone line path
//! - [`view`]: Error / loading / data state shared by every renderer
//! - `client`: Native HTTP client (feature `native`)
//! - `config`: TOML and environment configuration (feature `native`)
//! - `render`: Terminal output for the CLI (feature `native`)
//!
//! The browser frontend (`uspop-ui`) uses this crate with default features
//! off, which leaves only the pure modules.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uspop::{Config, DataUsaClient, TrendView, TrendWindow, DisplayState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataUsaClient::new(Config::default().source)?;
//!
//!     let mut view = TrendView::new();
//!     view.apply(client.fetch_population().await);
//!     view.select(TrendWindow::FiveYears);
//!
//!     if let DisplayState::Data(records) = view.display() {
//!         println!("{}", uspop::render::table(records));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod population;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod render;

// Re-export top-level types for convenience
pub use population::{
    filter_nation, parse_population, trend_slice, FetchError, FetchResult, InvalidTrendWindow,
    PopulationRecord, PopulationResponse, TrendWindow, DEFAULT_NATION, POPULATION_ENDPOINT,
};

pub use chart::{
    format_millions, monotone_segments, y_ticks, CubicSegment, LinearScale, Margins, PlotArea,
    Point, YDomain,
};

pub use view::{DisplayState, Screen, TrendView};

#[cfg(feature = "native")]
pub use client::DataUsaClient;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, SourceConfig};
