use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::price::PriceSample;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Trading-day threshold for the compact output size: Alpha Vantage's
/// "compact" response carries the last 100 trading days.
const COMPACT_WINDOW_DAYS: i64 = 100;

/// Alpha Vantage API provider for stock/equity prices.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key (set via settings as "alphavantage").
/// - **Coverage**: 100k+ global equity symbols.
///
/// Registered as a fallback behind Yahoo Finance. Prices are returned
/// in the stock's native currency (typically USD).
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, api_key }
    }

    /// Fetch the daily time series for a stock symbol.
    /// Requests the full series when the range reaches past the
    /// compact window, the last 100 trading days otherwise.
    async fn fetch_daily_series(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<HashMap<String, DailyQuote>, CoreError> {
        let today = chrono::Utc::now().date_naive();
        let outputsize = if (today - from).num_days() > COMPACT_WINDOW_DAYS {
            "full"
        } else {
            "compact"
        };

        let resp: TimeSeriesResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", &symbol.to_uppercase()),
                ("outputsize", outputsize),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse time series for {symbol}: {e}"),
            })?;

        resp.time_series.ok_or_else(|| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("No time series data for {symbol}. API limit may be exceeded."),
        })
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyQuote>>,
}

#[derive(Deserialize)]
struct DailyQuote {
    #[serde(rename = "4. close")]
    close: String,
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PriceSample>, CoreError> {
        let time_series = self.fetch_daily_series(symbol, from).await?;

        let mut samples: Vec<PriceSample> = time_series
            .iter()
            .filter_map(|(date_str, quote)| {
                let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
                if date < from {
                    return None;
                }
                if let Some(t) = to {
                    if date > t {
                        return None;
                    }
                }
                let close: f64 = quote.close.parse().ok()?;
                Some(PriceSample { date, close })
            })
            .collect();

        // The response is keyed by date string; restore ascending order.
        samples.sort_by_key(|s| s.date);
        Ok(samples)
    }
}
