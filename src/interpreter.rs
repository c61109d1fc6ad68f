/// The evaluator module computes results and holds session state.
///
/// The evaluator applies operators and builtin functions to values, manages
/// the variable table and the live configuration, and commits each input line
/// as a whole or not at all.
///
/// # Responsibilities
/// - Evaluates every supported operator over all value variants.
/// - Resolves variables, builtin constants and builtin functions.
/// - Reports errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes one input line for the parser.
///
/// The lexer reads the raw line and hands out tokens on demand: numbers,
/// identifiers, operators, keywords and embedded options. Literals without a
/// radix prefix are scanned in the default radix, which can change while the
/// line is being lexed.
///
/// # Responsibilities
/// - Converts the input into tokens with their text and offset.
/// - Scans radix-prefixed, fractional, exponent and imaginary literals.
/// - Reports invalid characters and malformed numbers.
pub mod lexer;
/// Numeric literal syntax and conversion.
///
/// Splits a literal into radix, type code, digits, exponent and imaginary
/// suffix, and converts it to a value under the session configuration.
pub mod literal;
/// Session options and the option grammar.
///
/// Defines the configuration (radices, word size, precision, float layout)
/// and interprets option arguments from the command line and from the start
/// of input lines.
pub mod options;
/// The output module renders values as text.
///
/// Decimal and power-of-two radices, grouped integer digits, `%g`-style
/// decimal reals and power-of-two significands with binary exponents.
pub mod output;
/// The parser module evaluates input lines while it parses them.
///
/// The parser drives the lexer, applies leading options, and evaluates
/// expressions by recursive descent over the operator precedence levels.
///
/// # Responsibilities
/// - Validates the grammar and reports missing or unexpected tokens.
/// - Applies options, assignments and `delete` to the session context.
/// - Evaluates each rule as soon as it is recognized.
pub mod parser;
/// The value module defines the numeric types used during evaluation.
///
/// This module declares the `Value` enum with its word-size-wrapped integer,
/// real and complex variants, and provides promotion between them.
pub mod value;
