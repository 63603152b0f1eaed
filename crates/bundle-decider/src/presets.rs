use bundle_models::PriceInput;
use rust_decimal::Decimal;

/// A canned pair of prices for demonstrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub number: u8,
    pub label: &'static str,
    pub input: PriceInput,
}

/// All built-in examples, in order.
pub fn examples() -> Vec<Example> {
    vec![
        Example {
            number: 1,
            label: "High price difference - don't buy",
            input: PriceInput::new(Decimal::from(80_000), Decimal::from(50_000)),
        },
        Example {
            number: 2,
            label: "Low price difference - buy",
            input: PriceInput::new(Decimal::from(60_000), Decimal::from(58_000)),
        },
    ]
}

/// Look up a built-in example by number.
pub fn example(number: u8) -> Option<PriceInput> {
    examples()
        .into_iter()
        .find(|e| e.number == number)
        .map(|e| e.input)
}
