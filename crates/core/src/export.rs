//! Export computed results as JSON or CSV strings.
//! File I/O is the caller's job.

use crate::errors::CoreError;
use crate::models::performance::YtdRow;
use crate::models::report::PortfolioReport;
use crate::view;

/// Export YTD rows as a pretty-printed JSON array.
pub fn ytd_to_json(rows: &[YtdRow]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize YTD rows: {e}")))
}

/// Export a portfolio report (rows plus totals) as pretty-printed JSON.
pub fn report_to_json(report: &PortfolioReport) -> Result<String, CoreError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize report: {e}")))
}

/// Export YTD rows as CSV with a header row.
/// Cells match the display table, so "N/A"/"Error" markers are kept.
pub fn ytd_to_csv(rows: &[YtdRow]) -> String {
    let mut csv = csv_line(&view::YTD_COLUMNS.map(String::from));
    for row in rows {
        csv.push_str(&csv_line(&view::ytd_cells(row)));
    }
    csv
}

/// Export portfolio rows as CSV with a header row.
/// Totals are not included; render them from `view::summary_lines`.
pub fn report_to_csv(report: &PortfolioReport) -> String {
    let mut csv = csv_line(&view::PORTFOLIO_COLUMNS.map(String::from));
    for row in &report.rows {
        csv.push_str(&csv_line(&view::portfolio_cells(row)));
    }
    csv
}

fn csv_line(cells: &[String]) -> String {
    let mut line = cells
        .iter()
        .map(|c| escape_csv(c))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Quote a field containing commas, quotes, or newlines.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
