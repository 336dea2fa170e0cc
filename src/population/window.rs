//! Trend window selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::InvalidTrendWindow;
use super::types::PopulationRecord;

/// Number of most recent years shown on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum TrendWindow {
    #[default]
    ThreeYears,
    FiveYears,
    TenYears,
}

impl TrendWindow {
    /// Selectable windows in button order
    pub const ALL: [TrendWindow; 3] = [
        TrendWindow::ThreeYears,
        TrendWindow::FiveYears,
        TrendWindow::TenYears,
    ];

    /// Window length in years
    pub fn years(self) -> usize {
        match self {
            TrendWindow::ThreeYears => 3,
            TrendWindow::FiveYears => 5,
            TrendWindow::TenYears => 10,
        }
    }

    pub fn from_years(years: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|window| window.years() == years)
    }

    /// Button caption, e.g. "5 Years"
    pub fn label(self) -> String {
        format!("{} Years", self.years())
    }
}

impl fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TrendWindow {
    type Err = InvalidTrendWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_years)
            .ok_or_else(|| InvalidTrendWindow(s.to_string()))
    }
}

impl TryFrom<usize> for TrendWindow {
    type Error = InvalidTrendWindow;

    fn try_from(years: usize) -> Result<Self, Self::Error> {
        Self::from_years(years).ok_or_else(|| InvalidTrendWindow(years.to_string()))
    }
}

impl From<TrendWindow> for usize {
    fn from(window: TrendWindow) -> Self {
        window.years()
    }
}

/// The last `window` records, or all of them when the series is shorter
pub fn trend_slice(records: &[PopulationRecord], window: TrendWindow) -> &[PopulationRecord] {
    let start = records.len().saturating_sub(window.years());
    &records[start..]
}
