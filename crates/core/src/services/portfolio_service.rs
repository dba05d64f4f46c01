use chrono::NaiveDate;

use super::quote_service::QuoteService;
use super::truncate_diagnostic;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::report::{PortfolioReport, PortfolioRow, PositionOutcome, PositionValuation};

/// Fixed input format for purchase dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Widest diagnostic that fits the portfolio table's last column.
const DIAGNOSTIC_MAX_CHARS: usize = 15;

/// Manages the holdings list and values the portfolio against fetched
/// price history.
///
/// Validation is pure; valuation is one sequential fetch per holding,
/// in list order. A holding whose fetch fails or returns no data
/// yields an unavailable row and is excluded from the totals; it never
/// aborts the batch.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw entry fields and append a new holding.
    ///
    /// Rules:
    /// - ticker, shares, and purchase date must be non-empty after trimming
    /// - shares must parse as a number and be strictly positive
    /// - purchase date must parse as YYYY-MM-DD
    ///
    /// On any failure the holdings list is left untouched.
    pub fn add_holding(
        &self,
        holdings: &mut Vec<Holding>,
        ticker: &str,
        shares: &str,
        purchase_date: &str,
    ) -> Result<Holding, CoreError> {
        let holding = Self::parse_holding(ticker, shares, purchase_date)?;
        holdings.push(holding.clone());
        Ok(holding)
    }

    /// Parse and validate raw entry fields into a `Holding` without
    /// mutating anything.
    pub fn parse_holding(
        ticker: &str,
        shares: &str,
        purchase_date: &str,
    ) -> Result<Holding, CoreError> {
        let ticker = ticker.trim();
        let shares_str = shares.trim();
        let date_str = purchase_date.trim();

        if ticker.is_empty() || shares_str.is_empty() || date_str.is_empty() {
            return Err(CoreError::ValidationError(
                "Ticker, shares, and purchase date are all required".into(),
            ));
        }

        let shares: f64 = shares_str.parse().map_err(|_| {
            CoreError::ValidationError(format!(
                "Invalid share count '{shares_str}': must be a number"
            ))
        })?;
        if !shares.is_finite() || shares <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Invalid share count {shares}: must be positive"
            )));
        }

        let purchase_date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            CoreError::ValidationError(format!(
                "Invalid purchase date '{date_str}': use YYYY-MM-DD"
            ))
        })?;

        Ok(Holding::new(ticker, shares, purchase_date))
    }

    /// Value every holding and aggregate the totals.
    ///
    /// Fails only when the holdings list is empty. Per-holding fetch
    /// problems are carried as unavailable rows; totals cover valued
    /// rows only, and the overall percentage is guarded against a zero
    /// total cost (every holding unavailable).
    pub async fn calculate(
        &self,
        quotes: &QuoteService,
        holdings: &[Holding],
    ) -> Result<PortfolioReport, CoreError> {
        if holdings.is_empty() {
            return Err(CoreError::EmptyPortfolio);
        }

        let mut rows = Vec::with_capacity(holdings.len());
        let mut total_cost = 0.0;
        let mut total_value = 0.0;

        for holding in holdings {
            let row = self.value_holding(quotes, holding).await;
            if let PositionOutcome::Valued(v) = &row.outcome {
                total_cost += v.cost;
                total_value += v.value;
            }
            rows.push(row);
        }

        let total_gain_amount = total_value - total_cost;
        let total_gain_percent = if total_cost > 0.0 {
            total_gain_amount / total_cost * 100.0
        } else {
            0.0
        };

        Ok(PortfolioReport {
            rows,
            total_cost,
            total_value,
            total_gain_amount,
            total_gain_percent,
        })
    }

    /// Value a single holding from its purchase date to now.
    async fn value_holding(&self, quotes: &QuoteService, holding: &Holding) -> PortfolioRow {
        let outcome = match quotes
            .fetch_history(&holding.ticker, holding.purchase_date, None)
            .await
        {
            Ok(samples) => match (samples.first(), samples.last()) {
                (Some(first), Some(last)) => PositionOutcome::Valued(
                    PositionValuation::from_closes(first.close, last.close, holding.shares),
                ),
                _ => PositionOutcome::NoData,
            },
            Err(err) => {
                tracing::warn!(ticker = %holding.ticker, error = %err, "valuation fetch failed");
                PositionOutcome::Failed {
                    message: truncate_diagnostic(&err.to_string(), DIAGNOSTIC_MAX_CHARS),
                }
            }
        };

        PortfolioRow {
            ticker: holding.ticker.clone(),
            shares: holding.shares,
            purchase_date: holding.purchase_date,
            outcome,
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
