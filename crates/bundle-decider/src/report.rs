use bundle_models::{EvaluationReport, PriceInput, REPORT_SCHEMA_VERSION};
use chrono::Utc;
use uuid::Uuid;

use crate::evaluator::Evaluator;

/// Evaluate an already-validated input and wrap it in a report.
pub fn build_report(evaluator: &Evaluator, input: PriceInput) -> EvaluationReport {
    let result = evaluator.evaluate(input.bundle_price, input.parts_price);
    let analysis = evaluator.analyze(&input, &result);

    EvaluationReport {
        id: Uuid::new_v4(),
        schema_version: REPORT_SCHEMA_VERSION,
        evaluated_at: Utc::now(),
        input,
        result,
        analysis,
        threshold: evaluator.threshold(),
        currency_symbol: evaluator.currency_symbol().to_string(),
    }
}
