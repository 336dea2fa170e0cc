//! Y axis domain, ticks and labels

use crate::population::PopulationRecord;

/// Space left below the smallest value
pub const DOMAIN_PAD_BELOW: f64 = 500_000.0;

/// Space left above the largest value
pub const DOMAIN_PAD_ABOVE: f64 = 1_000_000.0;

/// Target number of Y axis ticks
pub const Y_TICK_COUNT: usize = 5;

/// Label a population value in whole millions, e.g. `2_500_000` → `"3M"`.
///
/// Halves round away from zero.
pub fn format_millions(value: f64) -> String {
    let millions = (value / 1_000_000.0).round();
    // avoid "-0M"
    let millions = if millions == 0.0 { 0.0 } else { millions };
    format!("{}M", millions)
}

/// Visible value range of the Y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YDomain {
    pub min: f64,
    pub max: f64,
}

impl YDomain {
    /// Padded domain over `records`, `None` for an empty series
    pub fn from_records(records: &[PopulationRecord]) -> Option<Self> {
        let mut values = records.iter().map(PopulationRecord::value);
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));

        Some(Self {
            min: min - DOMAIN_PAD_BELOW,
            max: max + DOMAIN_PAD_ABOVE,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Round tick values inside `domain`, roughly `count` of them.
///
/// Steps are 1, 2 or 5 times a power of ten.
pub fn y_ticks(domain: YDomain, count: usize) -> Vec<f64> {
    let span = domain.span();
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let step = tick_step(span / count as f64);
    let first = (domain.min / step).ceil() as i64;
    let last = (domain.max / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

fn tick_step(raw: f64) -> f64 {
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * power
}
