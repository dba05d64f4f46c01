use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded purchase lot in the user's portfolio.
///
/// **Important**: Holdings do NOT store prices. The purchase price is
/// derived from fetched history (first close on or after the purchase
/// date) every time the portfolio is valued.
///
/// Duplicate tickers are allowed: two lots of the same symbol bought on
/// different dates (or even the same date) are tracked independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL", "MSFT")
    pub ticker: String,

    /// Number of shares (always positive; fractional shares allowed)
    pub shares: f64,

    /// Date of purchase (no time component, daily granularity)
    pub purchase_date: NaiveDate,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, shares: f64, purchase_date: NaiveDate) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            shares,
            purchase_date,
        }
    }
}
