use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two prices being compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceInput {
    /// Price of the pre-assembled computer bundle.
    pub bundle_price: Decimal,
    /// Total price of buying the equivalent parts separately.
    pub parts_price: Decimal,
}

impl PriceInput {
    pub fn new(bundle_price: Decimal, parts_price: Decimal) -> Self {
        Self {
            bundle_price,
            parts_price,
        }
    }

    /// Bundle price minus parts price. Positive means the bundle costs more.
    pub fn price_difference(&self) -> Decimal {
        self.bundle_price - self.parts_price
    }
}
