use bundle_models::EvaluationReport;

use crate::format::{format_currency, format_threshold};

/// Render a report as the plain-text result panel.
pub fn render_text(report: &EvaluationReport) -> String {
    let symbol = report.currency_symbol.as_str();
    let percentage = match report.analysis.percentage_difference {
        Some(pct) => format!("{pct:.2}%"),
        None => "n/a".to_string(),
    };

    let lines = [
        "Price Breakdown:".to_string(),
        format!(
            "  Computer Bundle Price: {}",
            format_currency(report.input.bundle_price, symbol)
        ),
        format!(
            "  Per Part Bundle Price: {}",
            format_currency(report.input.parts_price, symbol)
        ),
        format!(
            "  Price Difference: {}",
            format_currency(report.result.price_difference, symbol)
        ),
        String::new(),
        format!("Decision: {}", report.result.decision),
        format!("  {}", report.result.message),
        String::new(),
        "Recommendation:".to_string(),
        format!("  {}", report.result.recommendation),
        String::new(),
        "Analysis:".to_string(),
        format!(
            "  Savings by buying parts separately: {}",
            format_currency(report.analysis.savings, symbol)
        ),
        format!("  Percentage difference: {percentage}"),
        format!(
            "  Decision threshold ({}): {}",
            format_threshold(report.threshold, symbol),
            report.analysis.threshold_status.label()
        ),
    ];

    lines.join("\n")
}
