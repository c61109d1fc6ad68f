use crate::interpreter::lexer::{LexError, TokenKind};

/// The kinds of failure a line can produce, from lexing through evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token that cannot start or continue the construct being parsed.
    UnexpectedToken,
    /// A required token is missing; the error carries its kind.
    TokenExpected,
    /// A name that is neither a variable nor a builtin.
    UnknownIdentifier,
    /// Assignment to a builtin constant or function name.
    ReservedIdentifier,
    /// A numeric literal without digits, or one that cannot be converted.
    MalformedNumber,
    /// A character that starts no token.
    InvalidCharacter,
    /// An option token the option grammar does not recognise.
    InvalidOption,
    /// Division or remainder by an exact zero.
    DivisionByZero,
    /// Factorial of a negative, fractional or oversized operand.
    InvalidFactorialOperand,
    /// A bitwise operation on a real or complex operand.
    IntegerOperandRequired,
    /// A shift count with a fractional or imaginary part.
    WholeNumberRequired,
    /// An operation that is undefined for its operands.
    InvalidOperand,
}

impl ParseErrorKind {
    /// Returns the message printed after `Error: `.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::TokenExpected => "expected",
            Self::UnknownIdentifier => "unknown identifier",
            Self::ReservedIdentifier => "reserved identifier",
            Self::MalformedNumber => "malformed number",
            Self::InvalidCharacter => "invalid character",
            Self::InvalidOption => "invalid option",
            Self::DivisionByZero => "division by zero",
            Self::InvalidFactorialOperand => "factorial requires a non-negative integer",
            Self::IntegerOperandRequired => "integer operand required",
            Self::WholeNumberRequired => "whole number required",
            Self::InvalidOperand => "invalid operand",
        }
    }
}

/// An error raised while lexing, parsing or evaluating one input line.
///
/// The `Display` implementation is the user-facing error report:
///
/// ```
/// use radixcalc::{
///     error::{ParseError, ParseErrorKind},
///     interpreter::lexer::TokenKind,
/// };
///
/// let missing = ParseError::expected(TokenKind::RParen);
/// assert_eq!(missing.to_string(), "Error: \")\" expected.");
///
/// let zero = ParseError::from(ParseErrorKind::DivisionByZero);
/// assert_eq!(zero.to_string(), "Error: division by zero.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind:     ParseErrorKind,
    /// The missing token, for [`ParseErrorKind::TokenExpected`].
    pub expected: Option<TokenKind>,
}

impl ParseError {
    /// Creates a token-expected error for `expected`.
    #[must_use]
    pub const fn expected(expected: TokenKind) -> Self {
        Self { kind:     ParseErrorKind::TokenExpected,
               expected: Some(expected), }
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self { kind,
               expected: None }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        match error {
            LexError::InvalidCharacter => ParseErrorKind::InvalidCharacter.into(),
            LexError::MalformedNumber => ParseErrorKind::MalformedNumber.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: ")?;
        if self.kind == ParseErrorKind::TokenExpected
           && let Some(expected) = self.expected
        {
            write!(f, "{} ", expected.display_text())?;
        }
        write!(f, "{}.", self.kind.message())
    }
}

impl std::error::Error for ParseError {}
