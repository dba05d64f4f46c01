// ═══════════════════════════════════════════════════════════════════
//  View & Export Tests — formatting, table cells, tones, CSV/JSON
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use stock_tracker_core::export;
use stock_tracker_core::models::performance::{YtdQuote, YtdRow};
use stock_tracker_core::models::report::{
    PortfolioReport, PortfolioRow, PositionOutcome, PositionValuation,
};
use stock_tracker_core::view::{self, RowTone};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn valued_row(ticker: &str, purchase: f64, current: f64, shares: f64) -> PortfolioRow {
    PortfolioRow {
        ticker: ticker.into(),
        shares,
        purchase_date: d(2023, 1, 15),
        outcome: PositionOutcome::Valued(PositionValuation::from_closes(
            purchase, current, shares,
        )),
    }
}

fn sample_report() -> PortfolioReport {
    let rows = vec![
        valued_row("AAPL", 150.0, 180.0, 10.0),
        PortfolioRow {
            ticker: "GHOST".into(),
            shares: 1.0,
            purchase_date: d(2023, 1, 15),
            outcome: PositionOutcome::NoData,
        },
    ];
    PortfolioReport {
        rows,
        total_cost: 1500.0,
        total_value: 1800.0,
        total_gain_amount: 300.0,
        total_gain_percent: 20.0,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Scalar formatting
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn price_two_decimals_with_currency_prefix() {
        assert_eq!(view::format_price(180.0), "$180.00");
        assert_eq!(view::format_price(0.5), "$0.50");
        assert_eq!(view::format_price(1234.567), "$1234.57");
    }

    #[test]
    fn signed_price_carries_sign() {
        assert_eq!(view::format_signed_price(30.0), "$+30.00");
        assert_eq!(view::format_signed_price(-12.5), "$-12.50");
        assert_eq!(view::format_signed_price(0.0), "$+0.00");
    }

    #[test]
    fn signed_percent_carries_sign() {
        assert_eq!(view::format_signed_percent(20.0), "+20.00%");
        assert_eq!(view::format_signed_percent(-3.141), "-3.14%");
        assert_eq!(view::format_signed_percent(0.0), "+0.00%");
    }

    #[test]
    fn shares_two_decimals() {
        assert_eq!(view::format_shares(10.0), "10.00");
        assert_eq!(view::format_shares(0.25), "0.25");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  YTD table
// ═══════════════════════════════════════════════════════════════════

mod ytd_table {
    use super::*;

    #[test]
    fn priced_row_cells() {
        let row = YtdRow::priced("AAPL", YtdQuote::from_closes(150.0, 180.0));
        let cells = view::ytd_cells(&row);
        assert_eq!(
            cells,
            ["AAPL", "$180.00", "$150.00", "+20.00%", "UP"].map(String::from)
        );
    }

    #[test]
    fn no_data_row_cells() {
        let cells = view::ytd_cells(&YtdRow::no_data("GHOST"));
        assert_eq!(
            cells,
            ["GHOST", "N/A", "N/A", "N/A", "No Data"].map(String::from)
        );
    }

    #[test]
    fn failed_row_cells_carry_diagnostic() {
        let cells = view::ytd_cells(&YtdRow::failed("BAD", "API error (Yahoo"));
        assert_eq!(cells[0], "BAD");
        assert_eq!(cells[1], "Error");
        assert_eq!(cells[4], "API error (Yahoo");
    }

    #[test]
    fn tones_follow_change_sign() {
        let up = YtdRow::priced("A", YtdQuote::from_closes(100.0, 110.0));
        let down = YtdRow::priced("B", YtdQuote::from_closes(100.0, 90.0));
        let flat = YtdRow::priced("C", YtdQuote::from_closes(100.0, 100.0));
        assert_eq!(view::ytd_tone(&up), RowTone::Positive);
        assert_eq!(view::ytd_tone(&down), RowTone::Negative);
        assert_eq!(view::ytd_tone(&flat), RowTone::Neutral);
    }

    #[test]
    fn unavailable_rows_are_neutral() {
        assert_eq!(view::ytd_tone(&YtdRow::no_data("X")), RowTone::Neutral);
        assert_eq!(view::ytd_tone(&YtdRow::failed("X", "boom")), RowTone::Neutral);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio table
// ═══════════════════════════════════════════════════════════════════

mod portfolio_table {
    use super::*;

    #[test]
    fn valued_row_cells() {
        let cells = view::portfolio_cells(&valued_row("AAPL", 150.0, 180.0, 10.0));
        assert_eq!(
            cells,
            [
                "AAPL",
                "10.00",
                "2023-01-15",
                "$150.00",
                "$180.00",
                "$1500.00",
                "$1800.00",
                "$+300.00",
                "+20.00%",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn no_data_row_preserves_identity_cells() {
        let row = PortfolioRow {
            ticker: "GHOST".into(),
            shares: 2.5,
            purchase_date: d(2024, 7, 1),
            outcome: PositionOutcome::NoData,
        };
        let cells = view::portfolio_cells(&row);
        assert_eq!(cells[0], "GHOST");
        assert_eq!(cells[1], "2.50");
        assert_eq!(cells[2], "2024-07-01");
        assert!(cells[3..].iter().all(|c| c == "N/A"));
    }

    #[test]
    fn failed_row_puts_diagnostic_last() {
        let row = PortfolioRow {
            ticker: "BAD".into(),
            shares: 1.0,
            purchase_date: d(2024, 7, 1),
            outcome: PositionOutcome::Failed {
                message: "API error (Moc".into(),
            },
        };
        let cells = view::portfolio_cells(&row);
        assert!(cells[3..8].iter().all(|c| c == "Error"));
        assert_eq!(cells[8], "API error (Moc");
    }

    #[test]
    fn break_even_counts_as_positive_tone() {
        let row = valued_row("EVEN", 100.0, 100.0, 5.0);
        assert_eq!(view::portfolio_tone(&row), RowTone::Positive);
    }

    #[test]
    fn loss_is_negative_tone() {
        let row = valued_row("DOWN", 100.0, 80.0, 5.0);
        assert_eq!(view::portfolio_tone(&row), RowTone::Negative);
    }

    #[test]
    fn unavailable_is_neutral_tone() {
        let row = PortfolioRow {
            ticker: "GHOST".into(),
            shares: 1.0,
            purchase_date: d(2024, 7, 1),
            outcome: PositionOutcome::NoData,
        };
        assert_eq!(view::portfolio_tone(&row), RowTone::Neutral);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Summary
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn three_lines_with_totals() {
        let lines = view::summary_lines(&sample_report());
        assert_eq!(lines[0], "Total Investment: $1500.00");
        assert_eq!(lines[1], "Current Value: $1800.00");
        assert_eq!(lines[2], "Total Gain/Loss: $+300.00 (+20.00%)");
    }

    #[test]
    fn losing_portfolio_shows_negative_signs() {
        let report = PortfolioReport {
            rows: Vec::new(),
            total_cost: 1000.0,
            total_value: 900.0,
            total_gain_amount: -100.0,
            total_gain_percent: -10.0,
        };
        let lines = view::summary_lines(&report);
        assert_eq!(lines[2], "Total Gain/Loss: $-100.00 (-10.00%)");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Export
// ═══════════════════════════════════════════════════════════════════

mod exports {
    use super::*;

    #[test]
    fn ytd_csv_has_header_and_one_line_per_row() {
        let rows = vec![
            YtdRow::priced("AAPL", YtdQuote::from_closes(150.0, 180.0)),
            YtdRow::no_data("GHOST"),
        ];
        let csv = export::ytd_to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Ticker,Current Price,YTD Start Price,YTD Change %,Status"
        );
        assert_eq!(lines[1], "AAPL,$180.00,$150.00,+20.00%,UP");
        assert_eq!(lines[2], "GHOST,N/A,N/A,N/A,No Data");
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let rows = vec![YtdRow::failed("BAD", "timeout, retrying")];
        let csv = export::ytd_to_csv(&rows);
        assert!(csv.contains("\"timeout, retrying\""));
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        let rows = vec![YtdRow::failed("BAD", "got \"nope\"")];
        let csv = export::ytd_to_csv(&rows);
        assert!(csv.contains("\"got \"\"nope\"\"\""));
    }

    #[test]
    fn report_csv_has_header_and_rows() {
        let csv = export::report_to_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Ticker,Shares,Purchase Date"));
        assert!(lines[1].starts_with("AAPL,10.00,2023-01-15"));
    }

    #[test]
    fn ytd_json_roundtrips() {
        let rows = vec![
            YtdRow::priced("AAPL", YtdQuote::from_closes(150.0, 180.0)),
            YtdRow::failed("BAD", "timeout"),
        ];
        let json = export::ytd_to_json(&rows).unwrap();
        let back: Vec<YtdRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows, back);
    }

    #[test]
    fn report_json_roundtrips() {
        let report = sample_report();
        let json = export::report_to_json(&report).unwrap();
        let back: PortfolioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
