/// Complex helpers.
///
/// Integer powers of complex values by repeated squaring, and the constants
/// `e`, `pi` and `i` at the working precision.
pub mod complex;
/// Integer word sizes.
///
/// Wrapping of 128-bit containers to the configured word size, and the
/// wrapping integer power used by `^`.
pub mod integer;

pub mod core;
