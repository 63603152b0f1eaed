//! bundle-check - computer bundle purchase decision helper
//!
//! Compares the price of a pre-built computer bundle against buying the same
//! parts separately and recommends whether the bundle's premium is worth it.
//!
//! # Library Usage
//!
//! ```rust
//! use bundle_check::models::BundleCheckConfig;
//! use bundle_check::{build_evaluator, check_raw};
//!
//! let evaluator = build_evaluator(&BundleCheckConfig::default());
//! let report = check_raw(&evaluator, "80000", "50000").unwrap();
//! assert!(!report.result.should_buy);
//! ```

pub use bundle_decider as decider;
pub use bundle_models as models;

use std::path::Path;

use bundle_decider::{build_report, parse_input, validate, Evaluator, InputError};
use bundle_models::config::BundleCheckConfig;
use bundle_models::{EvaluationReport, PriceInput};
use rust_decimal::Decimal;
use thiserror::Error;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "config/bundle-check.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Threshold must not be negative: {0}")]
    NegativeThreshold(Decimal),
}

/// Parse a TOML configuration document. Missing sections fall back to defaults.
pub fn parse_config(text: &str) -> Result<BundleCheckConfig, ConfigError> {
    let config: BundleCheckConfig = toml::from_str(text)?;
    if config.evaluator.threshold.is_sign_negative() && !config.evaluator.threshold.is_zero() {
        return Err(ConfigError::NegativeThreshold(config.evaluator.threshold));
    }
    Ok(config)
}

/// Read and parse a TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<BundleCheckConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Build an Evaluator from configuration.
pub fn build_evaluator(config: &BundleCheckConfig) -> Evaluator {
    Evaluator::from_config(config)
}

/// Validate numeric input, then evaluate it into a report.
pub fn check(evaluator: &Evaluator, input: PriceInput) -> Result<EvaluationReport, InputError> {
    validate(&input)?;
    Ok(build_report(evaluator, input))
}

/// Parse two raw text fields, then evaluate them into a report.
pub fn check_raw(
    evaluator: &Evaluator,
    bundle_raw: &str,
    parts_raw: &str,
) -> Result<EvaluationReport, InputError> {
    let input = parse_input(bundle_raw, parts_raw, evaluator.currency_symbol())?;
    Ok(build_report(evaluator, input))
}
