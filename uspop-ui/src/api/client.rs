//! HTTP API Client
//!
//! Browser fetch of the population series.

use gloo_net::http::Request;
use uspop::{parse_population, FetchError, FetchResult, PopulationRecord, DEFAULT_NATION, POPULATION_ENDPOINT};

/// Fetch the population series and keep the United States records
pub async fn fetch_population() -> FetchResult<Vec<PopulationRecord>> {
    let response = Request::get(POPULATION_ENDPOINT)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_population(&body, DEFAULT_NATION)
}
