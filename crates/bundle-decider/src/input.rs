use std::str::FromStr;

use bundle_models::PriceInput;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::InputError;

/// Parse one price typed by the user.
///
/// Accepts surrounding whitespace, an optional currency symbol after any
/// sign, `,` thousands separators and scientific notation (`8e4`).
/// Anything else, including an empty string, misplaced separators and
/// values with more precision than `Decimal` holds, is `NonNumericInput`.
pub fn parse_price(raw: &str, currency_symbol: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let unsigned = if currency_symbol.is_empty() {
        unsigned
    } else {
        unsigned
            .strip_prefix(currency_symbol)
            .unwrap_or(unsigned)
            .trim_start()
    };

    let non_numeric = || InputError::NonNumericInput {
        raw: raw.to_string(),
    };
    let digits = strip_group_separators(unsigned).ok_or_else(non_numeric)?;
    if digits.is_empty() || digits.starts_with('-') {
        return Err(non_numeric());
    }

    let value = Decimal::from_str_exact(&digits)
        .or_else(|_| Decimal::from_scientific(&digits))
        .map_err(|_| non_numeric())?;

    Ok(if negative { -value } else { value })
}

/// Remove `,` thousands separators from the integer part.
///
/// The first group holds 1-3 digits and every later group exactly 3.
/// Separators anywhere else, and `_`, make the number invalid.
fn strip_group_separators(number: &str) -> Option<String> {
    if number.contains('_') {
        return None;
    }

    let split = number
        .find(|c: char| c == '.' || c == 'e' || c == 'E')
        .unwrap_or(number.len());
    let (whole, rest) = number.split_at(split);
    if rest.contains(',') {
        return None;
    }
    if !whole.contains(',') {
        return Some(number.to_string());
    }

    let mut groups = whole.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || groups.any(|g| g.len() != 3) {
        return None;
    }

    Some(format!("{}{rest}", whole.replace(',', "")))
}

/// Reject prices the evaluator must never see.
///
/// Negative prices are checked before the both-zero case.
pub fn validate(input: &PriceInput) -> Result<(), InputError> {
    if input.bundle_price.is_sign_negative() && !input.bundle_price.is_zero()
        || input.parts_price.is_sign_negative() && !input.parts_price.is_zero()
    {
        warn!(
            bundle_price = %input.bundle_price,
            parts_price = %input.parts_price,
            "Rejected negative price"
        );
        return Err(InputError::NegativeInput);
    }

    if input.bundle_price.is_zero() && input.parts_price.is_zero() {
        warn!("Rejected input with both prices zero");
        return Err(InputError::BothZeroInput);
    }

    Ok(())
}

/// Parse and validate the two raw fields. A non-numeric field in either
/// position is reported before any range check.
pub fn parse_input(
    bundle_raw: &str,
    parts_raw: &str,
    currency_symbol: &str,
) -> Result<PriceInput, InputError> {
    let parsed = parse_price(bundle_raw, currency_symbol)
        .and_then(|bundle| Ok((bundle, parse_price(parts_raw, currency_symbol)?)));

    let (bundle_price, parts_price) = match parsed {
        Ok(prices) => prices,
        Err(e) => {
            warn!(bundle_raw, parts_raw, "Rejected non-numeric price");
            return Err(e);
        }
    };

    let input = PriceInput::new(bundle_price, parts_price);
    validate(&input)?;
    Ok(input)
}
