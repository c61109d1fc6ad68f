/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// remainder, power, shifts and bitwise operators. Operands are promoted to a
/// common variant first.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, bitwise complement and the factorial family.
pub mod unary;

/// Core evaluation logic and session management.
///
/// Contains the session context with its live configuration and variable
/// table, and the transactional evaluation of input lines.
pub mod core;

/// Builtin constants and functions.
///
/// Resolves `pi`, `e` and `i` and the one-argument builtin functions, and
/// decides which names are reserved.
pub mod function;
