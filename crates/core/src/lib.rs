pub mod errors;
pub mod export;
pub mod models;
pub mod providers;
pub mod services;
pub mod view;

use models::{
    holding::Holding,
    performance::YtdRow,
    report::PortfolioReport,
    settings::Settings,
};
use providers::registry::QuoteProviderRegistry;
use services::{
    portfolio_service::PortfolioService, quote_service::QuoteService, ytd_service::YtdService,
};

use errors::CoreError;

pub use services::ytd_service::parse_symbols;

/// Main entry point for the Stock Tracker core library.
/// Holds the in-memory holdings list and all services needed to
/// analyze tickers and value the portfolio.
#[must_use]
pub struct StockTracker {
    holdings: Vec<Holding>,
    settings: Settings,
    quote_service: QuoteService,
    ytd_service: YtdService,
    portfolio_service: PortfolioService,
}

impl std::fmt::Debug for StockTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockTracker")
            .field("holdings", &self.holdings.len())
            .field("settings", &self.settings)
            .field("providers", &self.quote_service.provider_names())
            .finish()
    }
}

impl StockTracker {
    /// Create a tracker with an empty portfolio and default settings.
    pub fn new() -> Self {
        Self::build(Settings::default())
    }

    /// Create a tracker with custom settings (default tickers,
    /// provider API keys).
    pub fn with_settings(settings: Settings) -> Self {
        Self::build(settings)
    }

    /// Create a tracker with an explicit provider registry.
    /// Embedders and tests can supply their own `QuoteProvider`
    /// implementations this way.
    pub fn with_registry(settings: Settings, registry: QuoteProviderRegistry) -> Self {
        Self {
            holdings: Vec::new(),
            settings,
            quote_service: QuoteService::new(registry),
            ytd_service: YtdService::new(),
            portfolio_service: PortfolioService::new(),
        }
    }

    // ── YTD Performance ─────────────────────────────────────────────

    /// Compute year-to-date performance for a comma-separated ticker
    /// list (e.g., `"AAPL, tsla, MSFT"`).
    ///
    /// Returns one row per parsed symbol, in input order. Per-ticker
    /// fetch problems become `NoData`/`Failed` rows, never errors;
    /// the only error here is an input with no symbols at all.
    pub async fn compute_ytd(&self, input: &str) -> Result<Vec<YtdRow>, CoreError> {
        let symbols = parse_symbols(input);
        if symbols.is_empty() {
            return Err(CoreError::ValidationError(
                "Enter at least one ticker symbol".into(),
            ));
        }
        Ok(self.ytd_service.compute(&self.quote_service, &symbols).await)
    }

    /// Compute year-to-date performance for the configured default
    /// tickers.
    pub async fn compute_ytd_default(&self) -> Result<Vec<YtdRow>, CoreError> {
        let symbols = self.settings.default_tickers.clone();
        if symbols.is_empty() {
            return Err(CoreError::ValidationError(
                "No default tickers configured".into(),
            ));
        }
        Ok(self.ytd_service.compute(&self.quote_service, &symbols).await)
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Validate raw entry fields and append a new holding.
    /// Duplicate tickers are allowed and tracked as independent lots.
    pub fn add_holding(
        &mut self,
        ticker: &str,
        shares: &str,
        purchase_date: &str,
    ) -> Result<Holding, CoreError> {
        self.portfolio_service
            .add_holding(&mut self.holdings, ticker, shares, purchase_date)
    }

    /// All holdings, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Number of holdings without borrowing the list.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Value every holding and aggregate the totals.
    /// Errors only when the portfolio is empty.
    pub async fn calculate_portfolio(&self) -> Result<PortfolioReport, CoreError> {
        self.portfolio_service
            .calculate(&self.quote_service, &self.holdings)
            .await
    }

    /// Discard all holdings unconditionally. Asking the user to
    /// confirm is the interaction layer's job.
    pub fn clear_portfolio(&mut self) {
        self.holdings.clear();
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the default ticker list. Symbols are normalized the
    /// same way as YTD input (trimmed, uppercased, empties dropped).
    pub fn set_default_tickers(&mut self, input: &str) -> Result<(), CoreError> {
        let symbols = parse_symbols(input);
        if symbols.is_empty() {
            return Err(CoreError::ValidationError(
                "Enter at least one ticker symbol".into(),
            ));
        }
        self.settings.default_tickers = symbols;
        Ok(())
    }

    /// Set an API key for a provider (e.g., "alphavantage").
    /// Rebuilds the provider registry so the new key takes effect
    /// immediately.
    pub fn set_api_key(&mut self, provider: String, key: String) {
        self.settings.api_keys.insert(provider, key);
        self.rebuild_providers();
    }

    /// Remove an API key for a provider.
    /// Rebuilds the provider registry so the removal takes effect
    /// immediately.
    pub fn remove_api_key(&mut self, provider: &str) -> bool {
        let removed = self.settings.api_keys.remove(provider).is_some();
        if removed {
            self.rebuild_providers();
        }
        removed
    }

    // ── Provider Availability ───────────────────────────────────────

    /// Check if at least one quote provider is registered.
    #[must_use]
    pub fn has_quote_provider(&self) -> bool {
        self.quote_service.has_provider()
    }

    /// Names of the registered quote providers, in priority order.
    #[must_use]
    pub fn quote_provider_names(&self) -> Vec<String> {
        self.quote_service.provider_names()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings) -> Self {
        let registry = QuoteProviderRegistry::new_with_defaults(&settings.api_keys);
        Self::with_registry(settings, registry)
    }

    fn rebuild_providers(&mut self) {
        let registry = QuoteProviderRegistry::new_with_defaults(&self.settings.api_keys);
        self.quote_service = QuoteService::new(registry);
    }
}

impl Default for StockTracker {
    fn default() -> Self {
        Self::new()
    }
}
