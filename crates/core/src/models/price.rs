use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily closing price sample (date, close).
///
/// Transient: produced by quote providers, consumed by the analyzers,
/// never stored between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceSample {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}
