use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level configuration for bundle-check. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BundleCheckConfig {
    pub evaluator: EvaluatorConfig,
    pub display: DisplayConfig,
}

/// Configuration for the decision rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Price difference at or above which the bundle is not worth buying.
    pub threshold: Decimal,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            threshold: Decimal::from(3000),
        }
    }
}

/// Configuration for how amounts are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol prefixed to every amount (Philippine Peso by default).
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
        }
    }
}
