//! Core data types for population records

use serde::{Deserialize, Deserializer, Serialize};

/// One year of population for one nation, as served by the API.
///
/// Field names follow the tesseract drilldown/measure captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Year", deserialize_with = "lenient_integer")]
    pub year: i64,

    #[serde(rename = "Total Population", deserialize_with = "lenient_integer")]
    pub total_population: i64,

    #[serde(rename = "Nation")]
    pub nation: String,

    #[serde(rename = "Nation ID")]
    pub nation_id: String,
}

impl PopulationRecord {
    /// Create a new record
    pub fn new(
        year: i64,
        total_population: i64,
        nation: impl Into<String>,
        nation_id: impl Into<String>,
    ) -> Self {
        Self {
            year,
            total_population,
            nation: nation.into(),
            nation_id: nation_id.into(),
        }
    }

    /// Population as a plotting value
    pub fn value(&self) -> f64 {
        self.total_population as f64
    }
}

/// Response envelope of the `data.jsonrecords` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationResponse {
    pub data: Vec<PopulationRecord>,
}

/// Accepts `2020`, `2020.0` or `"2020"`.
///
/// Tesseract cubes are not consistent about member and measure types.
fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        Number::Float(f)
            if f.is_finite()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            Ok(f as i64)
        }
        Number::Float(f) => Err(serde::de::Error::custom(format!(
            "expected an integer in range, got {}",
            f
        ))),
        Number::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize() {
        let json = r#"{
            "Nation ID": "01000US",
            "Nation": "United States",
            "Year": 2022,
            "Total Population": 331097593,
            "Slug Nation": "united-states"
        }"#;

        let record: PopulationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record,
            PopulationRecord::new(2022, 331_097_593, "United States", "01000US")
        );
    }

    #[test]
    fn test_record_lenient_numbers() {
        let json = r#"{"Nation ID": "01000US", "Nation": "United States", "Year": "2019", "Total Population": 324697795.0}"#;
        let record: PopulationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, 2019);
        assert_eq!(record.total_population, 324_697_795);
    }

    #[test]
    fn test_record_rejects_fractional_population() {
        let json = r#"{"Nation ID": "01000US", "Nation": "United States", "Year": 2019, "Total Population": 1.5}"#;
        assert!(serde_json::from_str::<PopulationRecord>(json).is_err());
    }

    #[test]
    fn test_record_rejects_out_of_range_population() {
        for population in ["1e30", "-1e30", "9223372036854775808.0"] {
            let json = format!(
                r#"{{"Nation ID": "01000US", "Nation": "United States", "Year": 2020, "Total Population": {}}}"#,
                population
            );
            assert!(
                serde_json::from_str::<PopulationRecord>(&json).is_err(),
                "population {}",
                population
            );
        }
    }

    #[test]
    fn test_out_of_range_body_is_parse_failure() {
        let body = r#"{"data": [{"Nation ID": "01000US", "Nation": "United States", "Year": 2020, "Total Population": 1e30}]}"#;
        let err = crate::population::parse_population(body, "United States").unwrap_err();
        assert!(matches!(err, crate::population::FetchError::Parse(_)));
    }

    #[test]
    fn test_record_missing_field() {
        let json = r#"{"Nation": "United States", "Year": 2019, "Total Population": 1}"#;
        assert!(serde_json::from_str::<PopulationRecord>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let record = PopulationRecord::new(2020, 326_569_308, "United States", "01000US");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Year"], 2020);
        assert_eq!(value["Total Population"], 326_569_308);
        assert_eq!(value["Nation ID"], "01000US");
    }
}
