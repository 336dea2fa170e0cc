//! Plot area layout and value scales

use super::axis::YDomain;

/// Linear mapping from a value domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Space reserved around the plot for axis labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 20.0,
            top: 20.0,
            bottom: 40.0,
        }
    }
}

/// Inner rectangle of the chart, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area of a `width` x `height` surface; never negative in size
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: (width - margins.left - margins.right).max(0.0),
            height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X position of the `index`-th of `count` evenly spaced categories.
    ///
    /// The first and last categories sit on the plot edges; a single
    /// category is centred.
    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + index as f64 * self.width / (count - 1) as f64
    }

    /// Scale placing `domain.min` on the bottom edge and `domain.max` on the top
    pub fn y_scale(&self, domain: YDomain) -> LinearScale {
        LinearScale::new((domain.min, domain.max), (self.bottom(), self.top))
    }
}
