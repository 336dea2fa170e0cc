//! API Access
//!
//! Fetching population data from the Data USA tesseract API.

mod client;

pub use client::fetch_population;
