pub mod error;
pub mod evaluator;
pub mod format;
pub mod input;
pub mod presets;
pub mod render;
pub mod report;

pub use error::InputError;
pub use evaluator::{evaluate, Evaluator, DEFAULT_CURRENCY_SYMBOL, DEFAULT_THRESHOLD};
pub use input::{parse_input, parse_price, validate};
pub use presets::{example, examples, Example};
pub use render::render_text;
pub use report::build_report;
