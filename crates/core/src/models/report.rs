use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Computed financial fields of a single valued holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionValuation {
    /// First close on or after the purchase date
    pub purchase_price: f64,

    /// Most recent close
    pub current_price: f64,

    /// purchase_price * shares
    pub cost: f64,

    /// current_price * shares
    pub value: f64,

    /// value - cost
    pub gain_amount: f64,

    /// (current_price - purchase_price) / purchase_price * 100
    pub gain_percent: f64,
}

impl PositionValuation {
    /// Derive all financial fields from the boundary closes and share count.
    /// `purchase_price` must be positive (providers discard non-positive
    /// closes before data reaches this point).
    pub fn from_closes(purchase_price: f64, current_price: f64, shares: f64) -> Self {
        let cost = purchase_price * shares;
        let value = current_price * shares;
        Self {
            purchase_price,
            current_price,
            cost,
            value,
            gain_amount: value - cost,
            gain_percent: (current_price - purchase_price) / purchase_price * 100.0,
        }
    }
}

/// Outcome of valuing one holding.
///
/// Rows without history are never computed with zero defaults; they are
/// carried as `NoData`/`Failed` and excluded from the report totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PositionOutcome {
    /// History was available; valuation computed.
    Valued(PositionValuation),
    /// Fetch succeeded but returned zero samples (non-trading purchase
    /// date, unknown symbol).
    NoData,
    /// Fetch failed; carries a short diagnostic for display.
    Failed { message: String },
}

/// One row of the portfolio table. The holding's identity fields are
/// always preserved, even when no valuation could be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub ticker: String,
    pub shares: f64,
    pub purchase_date: NaiveDate,
    pub outcome: PositionOutcome,
}

impl PortfolioRow {
    /// Borrow the valuation if this row was successfully valued.
    pub fn valuation(&self) -> Option<&PositionValuation> {
        match &self.outcome {
            PositionOutcome::Valued(v) => Some(v),
            _ => None,
        }
    }
}

/// Full portfolio valuation: one row per holding, in holding order,
/// plus aggregate totals over the valued rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub rows: Vec<PortfolioRow>,

    /// Sum of cost over valued rows
    pub total_cost: f64,

    /// Sum of value over valued rows
    pub total_value: f64,

    /// total_value - total_cost
    pub total_gain_amount: f64,

    /// total_gain_amount / total_cost * 100, or 0.0 when total_cost is 0
    pub total_gain_percent: f64,
}

impl PortfolioReport {
    /// Number of rows that could not be valued.
    pub fn unavailable_count(&self) -> usize {
        self.rows.iter().filter(|r| r.valuation().is_none()).count()
    }
}
