use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals and `,` thousands separators.
///
/// `30000` becomes `30,000.00`, `-1234.565` becomes `-1,234.57`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = sign_prefix(rounded);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}{}.{fraction}", group_thousands(whole))
}

/// Format an amount as currency, e.g. `₱30,000.00` or `-₱2,000.00`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(unsigned) => format!("-{symbol}{unsigned}"),
        None => format!("{symbol}{formatted}"),
    }
}

/// Format a threshold for messages. Whole numbers drop the decimals (`₱3,000`).
pub fn format_threshold(threshold: Decimal, symbol: &str) -> String {
    if !threshold.fract().is_zero() {
        return format_currency(threshold, symbol);
    }
    let whole = threshold.abs().trunc().normalize().to_string();
    format!("{}{symbol}{}", sign_prefix(threshold), group_thousands(&whole))
}

fn sign_prefix(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
