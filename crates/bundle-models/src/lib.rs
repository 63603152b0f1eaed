pub mod config;
pub mod decision_result;
pub mod price_input;
pub mod report;

pub use config::{BundleCheckConfig, DisplayConfig, EvaluatorConfig};
pub use decision_result::{Decision, DecisionResult, PriceAnalysis, ThresholdStatus};
pub use price_input::PriceInput;
pub use report::{EvaluationReport, REPORT_SCHEMA_VERSION};
