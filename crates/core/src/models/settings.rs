use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configurable settings for the tracker session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Tickers analyzed when no explicit input is given.
    pub default_tickers: Vec<String>,

    /// Optional API keys for providers that require them.
    /// Keys: provider name (e.g., "alphavantage").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tickers: ["AAPL", "TSLA", "MSFT", "GOOGL"]
                .into_iter()
                .map(String::from)
                .collect(),
            api_keys: HashMap::new(),
        }
    }
}
