use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::price::PriceSample;

/// Trait abstraction for all daily-quote data providers.
///
/// Each market-data API (Yahoo Finance, Alpha Vantage) implements this
/// trait. If an API stops working or changes, we replace only that one
/// implementation and the rest of the codebase is untouched.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch daily close-price history for a symbol.
    ///
    /// `to == None` means an open-ended range: everything from `from`
    /// up to the most recent available close ("as of now").
    ///
    /// Returns samples sorted by date ascending. An empty Vec is a
    /// valid result (unknown symbol, no trading days in range) and is
    /// distinct from an error.
    async fn fetch_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PriceSample>, CoreError>;
}
