use bundle_models::config::BundleCheckConfig;
use bundle_models::{Decision, DecisionResult, PriceAnalysis, PriceInput, ThresholdStatus};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::format::{format_currency, format_threshold};

/// Price difference at or above which the bundle is not worth buying.
pub const DEFAULT_THRESHOLD: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

/// Philippine Peso.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Decides whether a bundle is worth its premium over buying parts separately.
///
/// The decision is a pure function of the two prices: `bundle - parts`
/// below the threshold means buy, at or above means don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    threshold: Decimal,
    currency_symbol: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Evaluator {
    pub fn new(threshold: Decimal, currency_symbol: impl Into<String>) -> Self {
        Self {
            threshold,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config(config: &BundleCheckConfig) -> Self {
        Self::new(config.evaluator.threshold, config.display.currency_symbol.clone())
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Compare the bundle price against the parts price.
    ///
    /// Total over all inputs. The difference saturates at the bounds of
    /// `Decimal`, which only matters for prices of opposite sign.
    pub fn evaluate(&self, bundle_price: Decimal, parts_price: Decimal) -> DecisionResult {
        let price_difference = bundle_price.saturating_sub(parts_price);
        let decision = if price_difference >= self.threshold {
            Decision::DontBuy
        } else {
            Decision::Buy
        };

        debug!(
            %bundle_price,
            %parts_price,
            %price_difference,
            threshold = %self.threshold,
            decision = decision.label(),
            "Evaluated bundle"
        );

        let difference_text = format_currency(price_difference, &self.currency_symbol);
        let threshold_text = format_threshold(self.threshold, &self.currency_symbol);

        let (message, recommendation) = match decision {
            Decision::DontBuy => (
                format!("Price difference is {difference_text}, which is ≥ {threshold_text}"),
                format!(
                    "Don't buy the bundle. The price difference is too high (≥ {threshold_text}). \
                     Consider buying parts separately to save money."
                ),
            ),
            Decision::Buy => (
                format!("Price difference is {difference_text}, which is < {threshold_text}"),
                format!(
                    "Go ahead and buy the bundle! The price difference is acceptable (< {threshold_text}). \
                     The convenience of a bundle might be worth the small premium."
                ),
            ),
        };

        DecisionResult {
            decision,
            message,
            recommendation,
            should_buy: decision.should_buy(),
            price_difference,
        }
    }

    /// Derive the supplementary figures for an evaluated input.
    pub fn analyze(&self, input: &PriceInput, result: &DecisionResult) -> PriceAnalysis {
        let percentage_difference = if input.parts_price.is_zero() {
            None
        } else {
            result
                .price_difference
                .checked_div(input.parts_price)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        };

        PriceAnalysis {
            savings: result.price_difference.abs(),
            percentage_difference,
            threshold_status: if result.price_difference >= self.threshold {
                ThresholdStatus::Exceeded
            } else {
                ThresholdStatus::WithinRange
            },
        }
    }
}

/// Evaluate with the default 3000 threshold and peso formatting.
pub fn evaluate(bundle_price: Decimal, parts_price: Decimal) -> DecisionResult {
    Evaluator::default().evaluate(bundle_price, parts_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn large_premium_is_dont_buy() {
        let result = evaluate(dec!(80000), dec!(50000));
        assert_eq!(result.price_difference, dec!(30000));
        assert!(!result.should_buy);
        assert_eq!(result.decision, Decision::DontBuy);
        assert_eq!(result.decision.label(), "Don't buy!");
        assert_eq!(
            result.message,
            "Price difference is ₱30,000.00, which is ≥ ₱3,000"
        );
        assert_eq!(
            result.recommendation,
            "Don't buy the bundle. The price difference is too high (≥ ₱3,000). \
             Consider buying parts separately to save money."
        );
    }

    #[test]
    fn small_premium_is_buy() {
        let result = evaluate(dec!(60000), dec!(58000));
        assert_eq!(result.price_difference, dec!(2000));
        assert!(result.should_buy);
        assert_eq!(result.decision.label(), "Buy it!");
        assert_eq!(
            result.message,
            "Price difference is ₱2,000.00, which is < ₱3,000"
        );
        assert!(result
            .recommendation
            .starts_with("Go ahead and buy the bundle!"));
    }

    #[test]
    fn equal_prices_are_buy() {
        for p in [dec!(0), dec!(1), dec!(45999.99), dec!(1000000)] {
            let result = evaluate(p, p);
            assert_eq!(result.price_difference, dec!(0));
            assert!(result.should_buy, "p = {p}");
        }
    }

    #[test]
    fn difference_is_exact() {
        let pairs = [
            (dec!(0.1), dec!(0.2)),
            (dec!(80000.33), dec!(50000.11)),
            (dec!(12345.678), dec!(0)),
            (dec!(0), dec!(99999.99)),
        ];
        for (a, b) in pairs {
            assert_eq!(evaluate(a, b).price_difference, a - b);
        }
        assert_eq!(evaluate(dec!(0.3), dec!(0.1)).price_difference, dec!(0.2));
    }

    #[test]
    fn threshold_boundary() {
        for x in [dec!(0), dec!(1), dec!(50000), dec!(123.45)] {
            assert!(!evaluate(x + dec!(3000), x).should_buy, "x = {x}");
            assert!(evaluate(x + dec!(2999), x).should_buy, "x = {x}");
        }
    }

    #[test]
    fn fractional_gap_below_threshold_is_buy() {
        assert!(evaluate(dec!(2999.5), dec!(0)).should_buy);
        assert!(evaluate(dec!(52999.99), dec!(50000)).should_buy);
        assert!(!evaluate(dec!(53000.00), dec!(50000)).should_buy);
    }

    #[test]
    fn cheaper_bundle_is_buy() {
        let result = evaluate(dec!(45000), dec!(50000));
        assert_eq!(result.price_difference, dec!(-5000));
        assert!(result.should_buy);
        assert_eq!(
            result.message,
            "Price difference is -₱5,000.00, which is < ₱3,000"
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = Evaluator::default();
        let first = evaluator.evaluate(dec!(71500.25), dec!(68000));
        let second = evaluator.evaluate(dec!(71500.25), dec!(68000));
        assert_eq!(first, second);
    }

    #[test]
    fn custom_threshold_and_symbol() {
        let evaluator = Evaluator::new(dec!(500), "$");
        let result = evaluator.evaluate(dec!(1500), dec!(1000));
        assert!(!result.should_buy);
        assert_eq!(result.message, "Price difference is $500.00, which is ≥ $500");

        let result = evaluator.evaluate(dec!(1499.99), dec!(1000));
        assert!(result.should_buy);
    }

    #[test]
    fn from_config_copies_rule_and_display() {
        let mut config = BundleCheckConfig::default();
        config.evaluator.threshold = dec!(1000);
        config.display.currency_symbol = "€".to_string();

        let evaluator = Evaluator::from_config(&config);
        assert_eq!(evaluator.threshold(), dec!(1000));
        assert_eq!(evaluator.currency_symbol(), "€");
    }

    #[test]
    fn default_threshold_is_three_thousand() {
        assert_eq!(DEFAULT_THRESHOLD, dec!(3000));
        assert_eq!(Evaluator::default().threshold(), dec!(3000));
    }

    #[test]
    fn analysis_of_dont_buy() {
        let evaluator = Evaluator::default();
        let input = PriceInput::new(dec!(80000), dec!(50000));
        let result = evaluator.evaluate(input.bundle_price, input.parts_price);
        let analysis = evaluator.analyze(&input, &result);

        assert_eq!(analysis.savings, dec!(30000));
        assert_eq!(analysis.percentage_difference, Some(dec!(60)));
        assert_eq!(analysis.threshold_status, ThresholdStatus::Exceeded);
    }

    #[test]
    fn analysis_of_buy_rounds_percentage() {
        let evaluator = Evaluator::default();
        let input = PriceInput::new(dec!(60000), dec!(58000));
        let result = evaluator.evaluate(input.bundle_price, input.parts_price);
        let analysis = evaluator.analyze(&input, &result);

        assert_eq!(analysis.savings, dec!(2000));
        // 2000 / 58000 * 100 = 3.448...
        assert_eq!(analysis.percentage_difference, Some(dec!(3.45)));
        assert_eq!(analysis.threshold_status, ThresholdStatus::WithinRange);
    }

    #[test]
    fn analysis_with_free_parts_has_no_percentage() {
        let evaluator = Evaluator::default();
        let input = PriceInput::new(dec!(2500), dec!(0));
        let result = evaluator.evaluate(input.bundle_price, input.parts_price);
        let analysis = evaluator.analyze(&input, &result);

        assert_eq!(analysis.percentage_difference, None);
        assert_eq!(analysis.savings, dec!(2500));
    }

    #[test]
    fn analysis_savings_is_absolute() {
        let evaluator = Evaluator::default();
        let input = PriceInput::new(dec!(40000), dec!(50000));
        let result = evaluator.evaluate(input.bundle_price, input.parts_price);
        let analysis = evaluator.analyze(&input, &result);

        assert_eq!(analysis.savings, dec!(10000));
        assert_eq!(analysis.percentage_difference, Some(dec!(-20)));
    }
}
