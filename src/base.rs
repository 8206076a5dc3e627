/// Reading, writing and converting integer literals.
pub mod convert;
/// The digit alphabet and base bounds.
pub mod digits;

pub use convert::{Conversion, TargetBase, convert, format_in_base, parse_in_base};
pub use digits::{DIGITS, MAX_BASE, MIN_BASE, allowed_digits, check_base};
