//! Trend View State
//!
//! The state behind the single population view: fetched records, the
//! loading and error flags, and the selected trend window. Renderers only
//! read from it through [`TrendView::screen`], [`TrendView::visible`] and
//! [`TrendView::display`].
//!
//! # Display priority
//!
//! ```text
//!   failed  →  Error
//!   loading →  Loading
//!   else    →  Data(last N records)
//! ```

use crate::population::{trend_slice, FetchResult, PopulationRecord, TrendWindow};

/// Which of the three mutually exclusive screens is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Error,
    Loading,
    Data,
}

/// A screen together with the records it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayState<'a> {
    Error,
    Loading,
    Data(&'a [PopulationRecord]),
}

/// View state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    records: Option<Vec<PopulationRecord>>,
    loading: bool,
    failed: bool,
    window: TrendWindow,
}

impl Default for TrendView {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendView {
    /// A view waiting for its fetch
    pub fn new() -> Self {
        Self {
            records: None,
            loading: true,
            failed: false,
            window: TrendWindow::default(),
        }
    }

    /// Store the nation-filtered records and leave the loading state
    pub fn resolve(&mut self, records: Vec<PopulationRecord>) {
        self.records = Some(records);
        self.loading = false;
    }

    /// Record a network or parse failure
    pub fn fail(&mut self) {
        self.failed = true;
        self.loading = false;
    }

    /// Apply the outcome of the fetch
    pub fn apply(&mut self, result: FetchResult<Vec<PopulationRecord>>) {
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Population data loaded");
                self.resolve(records);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Population fetch failed");
                self.fail();
            }
        }
    }

    /// Change the trend window; the fetched records are kept as they are
    pub fn select(&mut self, window: TrendWindow) {
        self.window = window;
    }

    pub fn window(&self) -> TrendWindow {
        self.window
    }

    pub fn is_active(&self, window: TrendWindow) -> bool {
        self.window == window
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// All fetched records, empty until the fetch resolves
    pub fn records(&self) -> &[PopulationRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    /// The selected trend window of the fetched records
    pub fn visible(&self) -> &[PopulationRecord] {
        trend_slice(self.records(), self.window)
    }

    pub fn screen(&self) -> Screen {
        if self.failed {
            Screen::Error
        } else if self.loading {
            Screen::Loading
        } else {
            Screen::Data
        }
    }

    pub fn display(&self) -> DisplayState<'_> {
        match self.screen() {
            Screen::Error => DisplayState::Error,
            Screen::Loading => DisplayState::Loading,
            Screen::Data => DisplayState::Data(self.visible()),
        }
    }
}
