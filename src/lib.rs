//! # radixcalc
//!
//! radixcalc is an arbitrary-precision calculator for the terminal.
//! It evaluates expressions over wrapped fixed-width integers, binary floating
//! point reals and complex numbers, reads and writes numbers in binary, octal,
//! decimal and hexadecimal, and keeps variables and settings across lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cast_possible_truncation)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        options::{Config, HELP_TEXT, Options},
    },
};

/// Provides the error type reported for failing input lines.
///
/// This module defines every failure that lexing, parsing or evaluating a line
/// can produce, and the `Error: ...` report printed for it.
///
/// # Responsibilities
/// - Defines the error kinds for all failure modes.
/// - Names the missing token for token-expected errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of input lines.
///
/// This module ties together options, lexing, parsing, evaluation, value
/// representations and output. It exposes the session type used to evaluate
/// lines one after another.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, value types and outputter.
/// - Provides entry points for evaluating and rendering input lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the operators of the expression language.
///
/// Binary and unary operator enums and their mapping from tokens.
pub mod operator;

/// Evaluates a single line in a fresh session and renders the result.
///
/// The line may start with options, which apply to its own evaluation and
/// output. A `help` request renders the help text; lines that produce no value
/// render as an empty string.
///
/// # Errors
/// Returns the line's error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use radixcalc::{calculate, interpreter::options::Config};
///
/// assert_eq!(calculate("2 ^ 10 - 1", Config::default()).unwrap(), "1023");
/// assert_eq!(calculate("#ox 255", Config::default()).unwrap(), "ff");
///
/// let err = calculate("1 / 0", Config::default()).unwrap_err();
/// assert_eq!(err.to_string(), "Error: division by zero.");
/// ```
pub fn calculate(line: &str, config: Config) -> Result<String, ParseError> {
    let mut context = Context::new(Options::new(config));
    Ok(match context.evaluate(line)? {
           Evaluation::Value(value) => context.render(&value),
           Evaluation::Help => HELP_TEXT.to_string(),
           Evaluation::Deleted | Evaluation::Configured | Evaluation::Empty => String::new(),
       })
}
