/// The [`Outputter`](core::Outputter) and the layout shared by all radices:
/// signs and the complex `a+bi` form.
pub mod core;

/// Radix 10 rendering.
///
/// Integers by repeated division, reals in the shortest of fixed and
/// scientific notation at the output precision.
pub mod decimal;

/// Radix 2, 8 and 16 rendering.
///
/// Integers in space-separated digit groups, reals as power-of-two
/// significands with a binary exponent.
pub mod radix_pow2;
