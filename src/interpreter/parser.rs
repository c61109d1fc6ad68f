/// Parser state and token handling.
///
/// Holds the lexer, the current token and the session context, and provides
/// the token-matching helpers shared by the other parser modules.
pub mod core;

/// Line-level parsing.
///
/// Handles leading options, the `help` and `delete` statements and
/// assignment.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level, from bitwise or down to power.
pub mod binary;

/// Unary, postfix and primary parsing.
///
/// Handles prefix negation and complement, the factorial family, numbers,
/// names, function calls and parenthesised expressions.
pub mod unary;
