use thiserror::Error;

/// Reasons a pair of prices is refused before it reaches the evaluator.
///
/// The display strings are the messages shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter valid numbers for both prices!")]
    NonNumericInput { raw: String },

    #[error("Prices cannot be negative!")]
    NegativeInput,

    #[error("Please enter prices greater than zero!")]
    BothZeroInput,
}
