use thiserror::Error;

/// Represents all errors that can occur while reading numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text that is neither `a,b` nor a complex literal such as `2+3j`.
    #[error("Invalid complex format '{input}' (try e.g. 2+3j or 2,3).")]
    InvalidComplex {
        /// The rejected input.
        input: String,
    },
    /// Text that is not a finite floating-point literal.
    #[error("Invalid number format '{input}'.")]
    InvalidNumber {
        /// The rejected input.
        input: String,
    },
    /// A fraction that does not split into exactly one numerator and one
    /// denominator.
    #[error("Invalid fraction format '{input}'.")]
    InvalidFraction {
        /// The rejected input.
        input: String,
    },
    /// The input was empty, or contained only a sign.
    #[error("Literal is empty.")]
    EmptyLiteral,
    /// Found an unexpected token while parsing an expression.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the expression.
        position: usize,
    },
    /// Reached the end of the expression unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the group opened at position {position}.")]
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Parentheses or prefix signs nest deeper than the parser allows.
    #[error("Expression nests too deeply at position {position} (limit {limit}).")]
    TooDeep {
        /// Byte offset of the token that exceeded the limit.
        position: usize,
        /// Maximum nesting depth.
        limit:    usize,
    },
    /// The expression has more tokens than the parser accepts.
    #[error("Expression has {count} tokens, more than the limit of {limit}.")]
    TooLong {
        /// Number of tokens in the input.
        count: usize,
        /// Maximum number of tokens.
        limit: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression starting with '{token}' at position {position}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
}
