use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decision_result::{DecisionResult, PriceAnalysis};
use crate::price_input::PriceInput;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// The complete output document for one checked pair of prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    pub id: Uuid,
    pub schema_version: u32,
    pub evaluated_at: DateTime<Utc>,
    pub input: PriceInput,
    pub result: DecisionResult,
    pub analysis: PriceAnalysis,
    /// Threshold the decision was made against.
    pub threshold: Decimal,
    pub currency_symbol: String,
}
