use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether to buy the bundle. Serialized as its display label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Decision {
    #[serde(rename = "Buy it!")]
    Buy,
    #[serde(rename = "Don't buy!")]
    DontBuy,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Buy => "Buy it!",
            Decision::DontBuy => "Don't buy!",
        }
    }

    pub fn should_buy(&self) -> bool {
        matches!(self, Decision::Buy)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single bundle-versus-parts evaluation.
///
/// Created fresh per evaluation. Serialized with camelCase field names
/// (`shouldBuy`, `priceDifference`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub decision: Decision,
    /// Which side of the threshold the price difference falls on.
    pub message: String,
    pub recommendation: String,
    /// True iff the price difference is below the threshold.
    pub should_buy: bool,
    /// Bundle price minus parts price, unrounded.
    pub price_difference: Decimal,
}

/// Where the price difference sits relative to the threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdStatus {
    Exceeded,
    WithinRange,
}

impl ThresholdStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ThresholdStatus::Exceeded => "Exceeded",
            ThresholdStatus::WithinRange => "Within acceptable range",
        }
    }
}

/// Supplementary figures shown next to a decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceAnalysis {
    /// Absolute price difference between the two options.
    pub savings: Decimal,
    /// Difference as a percentage of the parts price, 2 decimal places.
    /// None when the parts price is zero.
    pub percentage_difference: Option<Decimal>,
    pub threshold_status: ThresholdStatus,
}
