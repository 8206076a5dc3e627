/// Evaluation of expression trees over complex numbers.
pub mod eval;
/// The lexer module tokenizes arithmetic expressions.
///
/// Produces numeric, imaginary, operator and parenthesis tokens, each paired
/// with its byte offset in the input.
pub mod lexer;
/// Recursive-descent parser for `+ - * /`, unary signs and parentheses.
pub mod parser;

pub use eval::eval_expr;
pub use lexer::{Token, tokenize};
pub use parser::parse_tokens;

use crate::{complex::ComplexNumber, error::MathResult};

/// Tokenizes, parses and evaluates an arithmetic expression.
///
/// Only numeric literals, imaginary literals (`3j`), unary signs, the four
/// arithmetic operators and parentheses are accepted.
///
/// # Errors
/// - `MathError::Parse` for malformed input.
/// - `MathError::DivisionByZero` when a divisor evaluates to zero.
///
/// # Example
/// ```
/// use mathkit::{complex::ComplexNumber, expression::evaluate};
///
/// assert_eq!(evaluate("22/7 - 3").unwrap().real, 22.0 / 7.0 - 3.0);
/// assert_eq!(evaluate("2+3j").unwrap(), ComplexNumber::new(2.0, 3.0));
/// assert!(evaluate("1/0").is_err());
/// assert!(evaluate("(1+2").is_err());
/// ```
pub fn evaluate(input: &str) -> MathResult<ComplexNumber> {
    let tokens = tokenize(input)?;
    let expr = parse_tokens(&tokens)?;
    eval_expr(&expr)
}
