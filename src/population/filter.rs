//! Nation filter
//!
//! The API returns every nation in the cube; the view only ever shows one.

use super::error::FetchResult;
use super::types::{PopulationRecord, PopulationResponse};

/// Nation shown by the trend view
pub const DEFAULT_NATION: &str = "United States";

/// Keep only the records of `nation`, preserving API order.
///
/// Comparison is exact. A differently cased or relabelled nation yields an
/// empty series.
pub fn filter_nation(records: Vec<PopulationRecord>, nation: &str) -> Vec<PopulationRecord> {
    records
        .into_iter()
        .filter(|record| record.nation == nation)
        .collect()
}

/// Decode a response body and apply the nation filter
pub fn parse_population(body: &str, nation: &str) -> FetchResult<Vec<PopulationRecord>> {
    let response: PopulationResponse = serde_json::from_str(body)?;
    let total = response.data.len();
    let records = filter_nation(response.data, nation);

    tracing::debug!(total, matched = records.len(), nation, "Filtered population records");

    Ok(records)
}
