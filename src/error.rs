/// Errors of the whole pipeline.
///
/// Lexing, parsing and evaluation happen in a single pass over one input
/// line, so they share one error type: a [`ParseErrorKind`] plus, for missing
/// tokens, the kind of token that was expected. Its `Display` implementation
/// produces the `Error: ...` text shown to the user.
pub mod parse_error;

pub use parse_error::{ParseError, ParseErrorKind};
