//! Terminal Rendering
//!
//! Text output for the command-line preview: a table, JSON, or a plain
//! text line chart sharing the browser chart's axis rules.

use crate::chart::{format_millions, y_ticks, LinearScale, YDomain, Y_TICK_COUNT};
use crate::population::PopulationRecord;

/// Width of one year column in the text chart
const COLUMN_WIDTH: usize = 6;

/// Width of the Y label gutter in the text chart
const LABEL_WIDTH: usize = 6;

/// Tallest text chart drawn; larger heights are clamped
pub const MAX_CHART_HEIGHT: usize = 100;

/// Records as an aligned table
pub fn table(records: &[PopulationRecord]) -> String {
    let mut out = format!("{:<6} {:>15} {:>9}\n", "Year", "Population", "Millions");
    out.push_str(&"-".repeat(32));
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:<6} {:>15} {:>9}\n",
            record.year,
            group_thousands(record.total_population),
            format_millions(record.value())
        ));
    }

    out
}

/// Records as pretty JSON using the API's field names
pub fn json(records: &[PopulationRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Records as a text line chart `height` rows tall, clamped to
/// `2..=MAX_CHART_HEIGHT`.
///
/// Rows holding a Y tick are labelled in millions; each year gets one
/// column with a `●` on the row nearest to its value.
pub fn text_chart(records: &[PopulationRecord], height: usize) -> String {
    let height = height.clamp(2, MAX_CHART_HEIGHT);
    let Some(domain) = YDomain::from_records(records) else {
        return "No data\n".to_string();
    };

    // row 0 is the top line
    let rows = LinearScale::new((domain.min, domain.max), ((height - 1) as f64, 0.0));
    let row_of = |value: f64| rows.map(value).round().clamp(0.0, (height - 1) as f64) as usize;

    let mut labels = vec![String::new(); height];
    for tick in y_ticks(domain, Y_TICK_COUNT) {
        let row = row_of(tick);
        if labels[row].is_empty() {
            labels[row] = format_millions(tick);
        }
    }

    let mut grid = vec![vec![' '; records.len() * COLUMN_WIDTH]; height];
    for (i, record) in records.iter().enumerate() {
        grid[row_of(record.value())][i * COLUMN_WIDTH + COLUMN_WIDTH / 2] = '●';
    }

    let mut out = String::new();
    for (label, cells) in labels.iter().zip(grid) {
        let line: String = cells.into_iter().collect();
        out.push_str(&format!("{:>width$} │{}", label, line.trim_end(), width = LABEL_WIDTH));
        out.push('\n');
    }

    out.push_str(&format!(
        "{:>width$} └{}\n",
        "",
        "─".repeat(records.len() * COLUMN_WIDTH),
        width = LABEL_WIDTH
    ));

    let years: String = records
        .iter()
        .map(|r| format!("{:^width$}", r.year, width = COLUMN_WIDTH))
        .collect();
    out.push_str(&format!("{:>width$}  {}\n", "", years.trim_end(), width = LABEL_WIDTH));

    out
}

/// `331097593` → `"331,097,593"`
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
