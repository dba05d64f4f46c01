use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::price::PriceSample;
use crate::providers::registry::QuoteProviderRegistry;

/// Fetches daily close-price history from the registered providers.
///
/// Providers are tried in registration order. If the primary fails
/// (API down, rate limited, unknown symbol), the next provider is
/// tried automatically; the last error is returned only when every
/// provider has failed. An empty history from a provider is a valid
/// result and does not trigger fallback.
///
/// **Note on precision**: All prices are carried as `f64`, which has
/// ~15-17 significant decimal digits. Sufficient for display-grade
/// gain/loss arithmetic.
pub struct QuoteService {
    registry: QuoteProviderRegistry,
}

impl QuoteService {
    pub fn new(registry: QuoteProviderRegistry) -> Self {
        Self { registry }
    }

    /// Check if at least one provider is registered.
    pub fn has_provider(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Names of all registered providers, in priority order.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry.provider_names()
    }

    /// Fetch daily close history for a symbol, ascending by date.
    ///
    /// `to == None` is an open-ended range up to the most recent close.
    /// Samples with non-finite or non-positive closes are discarded
    /// (a close price is a positive real number by contract).
    pub async fn fetch_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PriceSample>, CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in providers {
            match provider.fetch_history(symbol, from, to).await {
                Ok(mut samples) => {
                    samples.retain(|s| s.close.is_finite() && s.close > 0.0);
                    return Ok(samples);
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        %symbol,
                        error = %err,
                        "quote fetch failed; trying next provider"
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }
}
