use logos::Logos;

use crate::error::ParseError;

/// A lexical token of an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Imaginary literal tokens, such as `3j`, `.5J` or `1e3j`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?[jJ]", parse_imaginary)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[jJ]", parse_imaginary)]
    Imaginary(f64),
    /// Real literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    Real(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an imaginary literal, dropping the `j` suffix.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first unrecognised run of
/// text.
///
/// # Example
/// ```
/// use mathkit::expression::{Token, tokenize};
///
/// let tokens = tokenize("2 + 3j").unwrap();
/// assert_eq!(tokens, vec![(Token::Real(2.0), 0), (Token::Plus, 2), (Token::Imaginary(3.0), 4)]);
/// assert!(tokenize("2 ** x").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    Ok(tokens)
}
