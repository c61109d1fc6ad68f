/// Dispatch of binary operators to their handlers.
pub mod core;

/// Addition, subtraction, multiplication, division and remainder.
pub mod scalar;

/// Exponentiation over every value variant.
pub mod power;

/// Shifts and the bitwise and, or and exclusive or.
pub mod bitwise;
