use serde::{Deserialize, Serialize};

/// Direction of a year-to-date price move.
///
/// `Flat` means the change is exactly 0.0. No epsilon tolerance is
/// applied: the classification must match the sign of the computed
/// percentage bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Classify a percentage change by exact sign.
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Direction::Up
        } else if change_percent < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Flat => write!(f, "FLAT"),
        }
    }
}

/// Year-to-date performance of a single ticker with available data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YtdQuote {
    /// Most recent close in the period
    pub current_price: f64,

    /// First trading-day close of the current calendar year
    pub period_start_price: f64,

    /// (current - start) / start * 100
    pub change_percent: f64,

    /// Sign of `change_percent` (Flat only on exact zero)
    pub direction: Direction,
}

impl YtdQuote {
    /// Build a quote from the period's boundary closes.
    /// `period_start_price` must be positive (providers discard
    /// non-positive closes before data reaches this point).
    pub fn from_closes(period_start_price: f64, current_price: f64) -> Self {
        let change_percent = (current_price - period_start_price) / period_start_price * 100.0;
        Self {
            current_price,
            period_start_price,
            change_percent,
            direction: Direction::from_change(change_percent),
        }
    }
}

/// Outcome of analyzing one ticker.
///
/// `NoData` and `Failed` are per-row conditions, not errors: a batch
/// always yields one row per requested ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum YtdOutcome {
    /// History was available; performance computed.
    Priced(YtdQuote),
    /// Fetch succeeded but returned zero samples (unknown symbol,
    /// no trading days in range).
    NoData,
    /// Fetch failed; carries a short diagnostic for display.
    Failed { message: String },
}

/// One row of the YTD performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YtdRow {
    pub ticker: String,
    pub outcome: YtdOutcome,
}

impl YtdRow {
    pub fn priced(ticker: impl Into<String>, quote: YtdQuote) -> Self {
        Self {
            ticker: ticker.into(),
            outcome: YtdOutcome::Priced(quote),
        }
    }

    pub fn no_data(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            outcome: YtdOutcome::NoData,
        }
    }

    pub fn failed(ticker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            outcome: YtdOutcome::Failed {
                message: message.into(),
            },
        }
    }
}
