use chrono::{Datelike, NaiveDate, Utc};

use super::quote_service::QuoteService;
use super::truncate_diagnostic;
use crate::models::performance::{YtdQuote, YtdRow};

/// Widest diagnostic that fits the YTD table's status column.
const DIAGNOSTIC_MAX_CHARS: usize = 20;

/// Computes year-to-date performance for a batch of tickers.
///
/// Pure orchestration over the quote service: one fetch per ticker,
/// sequential, in input order. A failing or empty ticker never aborts
/// the batch; it yields a `NoData`/`Failed` row and processing moves
/// to the next symbol.
pub struct YtdService;

impl YtdService {
    pub fn new() -> Self {
        Self
    }

    /// Analyze each symbol over [January 1 of the current year, today].
    ///
    /// Output is deterministic for identical fetched data and preserves
    /// input order, one row per symbol.
    pub async fn compute(&self, quotes: &QuoteService, symbols: &[String]) -> Vec<YtdRow> {
        let today = Utc::now().date_naive();
        let period_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();

        let mut rows = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            rows.push(self.analyze(quotes, symbol, period_start, today).await);
        }
        rows
    }

    async fn analyze(
        &self,
        quotes: &QuoteService,
        symbol: &str,
        period_start: NaiveDate,
        today: NaiveDate,
    ) -> YtdRow {
        match quotes.fetch_history(symbol, period_start, Some(today)).await {
            Ok(samples) => match (samples.first(), samples.last()) {
                (Some(first), Some(last)) => {
                    YtdRow::priced(symbol, YtdQuote::from_closes(first.close, last.close))
                }
                _ => YtdRow::no_data(symbol),
            },
            Err(err) => {
                tracing::warn!(ticker = %symbol, error = %err, "YTD fetch failed");
                YtdRow::failed(
                    symbol,
                    truncate_diagnostic(&err.to_string(), DIAGNOSTIC_MAX_CHARS),
                )
            }
        }
    }
}

impl Default for YtdService {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a user-supplied comma list into individual symbols:
/// trimmed, uppercased, empty fragments dropped.
pub fn parse_symbols(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
