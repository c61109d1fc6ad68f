use rug::{Complex, Float, Integer, float::Constant};

use crate::{
    error::ParseErrorKind,
    interpreter::value::core::FLOAT_PRECISION,
};

/// Euler's number at the working precision.
#[must_use]
pub fn euler() -> Float {
    Float::with_val(FLOAT_PRECISION, 1).exp()
}

/// Pi at the working precision.
#[must_use]
pub fn pi() -> Float {
    Float::with_val(FLOAT_PRECISION, Constant::Pi)
}

/// The imaginary unit.
#[must_use]
pub fn imaginary_unit() -> Complex {
    Complex::with_val(FLOAT_PRECISION, (0, 1))
}

/// Returns `true` if `f` is exactly [`euler`] at the working precision.
#[must_use]
pub fn is_euler(f: &Float) -> bool {
    *f == euler()
}

/// Raises `base` to an integer power by repeated squaring.
///
/// Negative exponents take the reciprocal of the positive power.
///
/// # Errors
/// `ParseErrorKind::DivisionByZero` for a zero base with a negative exponent.
///
/// # Example
/// ```
/// use radixcalc::interpreter::value::complex::{imaginary_unit, pow_integer};
/// use rug::Integer;
///
/// let minus_one = pow_integer(&imaginary_unit(), &Integer::from(2)).unwrap();
/// assert_eq!(*minus_one.real(), -1);
/// assert!(minus_one.imag().is_zero());
/// ```
pub fn pow_integer(base: &Complex, exponent: &Integer) -> Result<Complex, ParseErrorKind> {
    let negative = *exponent < 0;
    if negative && base.real().is_zero() && base.imag().is_zero() {
        return Err(ParseErrorKind::DivisionByZero);
    }

    let magnitude = exponent.clone().abs();
    let bits = magnitude.significant_bits();
    let mut result = Complex::with_val(FLOAT_PRECISION, (1, 0));
    let mut square = base.clone();
    for bit in 0..bits {
        if magnitude.get_bit(bit) {
            result *= &square;
        }
        if bit + 1 < bits {
            square.square_mut();
        }
    }

    if negative {
        result = Complex::with_val(FLOAT_PRECISION, (1, 0)) / &result;
    }
    Ok(result)
}
