//! Pure presentation helpers: computed results in, display strings out.
//!
//! No toolkit, no I/O, no state. A GUI/TUI embedding this crate renders
//! its tables from these cells and maps `RowTone` to whatever row
//! colors its theme defines.

use crate::models::performance::{YtdOutcome, YtdRow};
use crate::models::report::{PortfolioReport, PortfolioRow, PositionOutcome};

/// Visual weight of a table row, the toolkit-independent abstraction
/// of the classic green/red/yellow row coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    /// Gaining (green)
    Positive,
    /// Losing (red)
    Negative,
    /// Flat or unavailable (neutral)
    Neutral,
}

// ── Scalar formatting ───────────────────────────────────────────────

/// `"$180.00"`
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// `"$+30.00"` / `"$-12.50"`
pub fn format_signed_price(value: f64) -> String {
    format!("${value:+.2}")
}

/// `"+20.00%"` / `"-3.14%"`
pub fn format_signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

/// `"10.00"`
pub fn format_shares(value: f64) -> String {
    format!("{value:.2}")
}

// ── YTD table ───────────────────────────────────────────────────────

/// Column headers of the YTD performance table.
pub const YTD_COLUMNS: [&str; 5] = [
    "Ticker",
    "Current Price",
    "YTD Start Price",
    "YTD Change %",
    "Status",
];

/// Render one YTD row into its display cells.
pub fn ytd_cells(row: &YtdRow) -> [String; 5] {
    match &row.outcome {
        YtdOutcome::Priced(quote) => [
            row.ticker.clone(),
            format_price(quote.current_price),
            format_price(quote.period_start_price),
            format_signed_percent(quote.change_percent),
            quote.direction.to_string(),
        ],
        YtdOutcome::NoData => [
            row.ticker.clone(),
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
            "No Data".into(),
        ],
        YtdOutcome::Failed { message } => [
            row.ticker.clone(),
            "Error".into(),
            "Error".into(),
            "Error".into(),
            message.clone(),
        ],
    }
}

/// Tone for a YTD row: sign of the change, neutral when unavailable.
pub fn ytd_tone(row: &YtdRow) -> RowTone {
    match &row.outcome {
        YtdOutcome::Priced(quote) => {
            if quote.change_percent > 0.0 {
                RowTone::Positive
            } else if quote.change_percent < 0.0 {
                RowTone::Negative
            } else {
                RowTone::Neutral
            }
        }
        _ => RowTone::Neutral,
    }
}

// ── Portfolio table ─────────────────────────────────────────────────

/// Column headers of the portfolio table.
pub const PORTFOLIO_COLUMNS: [&str; 9] = [
    "Ticker",
    "Shares",
    "Purchase Date",
    "Purchase Price",
    "Current Price",
    "Total Cost",
    "Current Value",
    "Gain/Loss $",
    "Gain/Loss %",
];

/// Render one portfolio row into its display cells.
pub fn portfolio_cells(row: &PortfolioRow) -> [String; 9] {
    let ticker = row.ticker.clone();
    let shares = format_shares(row.shares);
    let date = row.purchase_date.to_string();

    match &row.outcome {
        PositionOutcome::Valued(v) => [
            ticker,
            shares,
            date,
            format_price(v.purchase_price),
            format_price(v.current_price),
            format_price(v.cost),
            format_price(v.value),
            format_signed_price(v.gain_amount),
            format_signed_percent(v.gain_percent),
        ],
        PositionOutcome::NoData => [
            ticker,
            shares,
            date,
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
            "N/A".into(),
        ],
        PositionOutcome::Failed { message } => [
            ticker,
            shares,
            date,
            "Error".into(),
            "Error".into(),
            "Error".into(),
            "Error".into(),
            "Error".into(),
            message.clone(),
        ],
    }
}

/// Tone for a portfolio row: positive covers break-even (a zero gain
/// is not a loss), neutral when unavailable.
pub fn portfolio_tone(row: &PortfolioRow) -> RowTone {
    match &row.outcome {
        PositionOutcome::Valued(v) => {
            if v.gain_amount >= 0.0 {
                RowTone::Positive
            } else {
                RowTone::Negative
            }
        }
        _ => RowTone::Neutral,
    }
}

// ── Aggregate summary ───────────────────────────────────────────────

/// Render the portfolio summary block:
/// total investment, current value, and overall gain/loss.
pub fn summary_lines(report: &PortfolioReport) -> [String; 3] {
    [
        format!("Total Investment: {}", format_price(report.total_cost)),
        format!("Current Value: {}", format_price(report.total_value)),
        format!(
            "Total Gain/Loss: {} ({})",
            format_signed_price(report.total_gain_amount),
            format_signed_percent(report.total_gain_percent),
        ),
    ]
}
