use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    complex::ComplexNumber,
    error::ParseError,
    expression::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and prefix signs the parser accepts.
pub const MAX_DEPTH: usize = 64;
/// Most tokens a single expression may contain.
pub const MAX_TOKENS: usize = 4096;

/// Parses a complete token stream into a single expression.
///
/// # Errors
/// - `TooLong` for more than [`MAX_TOKENS`] tokens.
/// - `UnexpectedEndOfInput` for an empty stream.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Any error from the grammar rules below.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooLong { count: tokens.len(),
                                         limit: MAX_TOKENS, });
    }
    let mut iter = tokens.iter().peekable();
    let expr = parse_additive(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{token:?}"),
                                                          position: *position, });
    }
    Ok(expr)
}

/// Enters one more level of nesting at `position`.
fn nest(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep { position,
                                         limit: MAX_DEPTH });
    }
    Ok(depth + 1)
}

/// Maps a token to the binary operator it denotes, if any.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses prefix signs. Each sign counts as one level of nesting.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_primary(tokens, depth),
    };
    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let expr = parse_unary(tokens, nest(depth, *position)?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position: *position })
}

/// Parses a literal or a parenthesised group. `depth` is the current nesting
/// level; a group deeper than [`MAX_DEPTH`] is rejected with `TooDeep`.
///
/// Grammar:
/// ```text
///     primary := real | imaginary | "(" additive ")"
/// ```
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Real(value) => Ok(Expr::Literal { value:    ComplexNumber::from(*value),
                                                 position: *position, }),
        Token::Imaginary(value) => Ok(Expr::Literal { value:    ComplexNumber::new(0.0, *value),
                                                      position: *position, }),
        Token::LParen => {
            let expr = parse_additive(tokens, nest(depth, *position)?)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { position: *position }),
            }
        },
        tok => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                 position: *position, }),
    }
}
