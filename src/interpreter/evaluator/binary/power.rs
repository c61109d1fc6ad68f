use rug::{Complex, Float, Integer, ops::Pow};

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        options::IntWordSize,
        value::{
            complex::{is_euler, pow_integer},
            core::{FLOAT_PRECISION, Promoted, Value, WHOLE_NUMBER_BITS},
            integer::wrapping_pow,
        },
    },
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// The operands are promoted to a common variant first.
    /// - Integers use wrapping repeated squaring. A negative exponent yields
    ///   the truncated reciprocal, which is `0` unless the base is `1` or `-1`.
    /// - Reals with a whole exponent use the correctly rounded power, which
    ///   stays real for a negative base. A negative
    ///   base with a fractional exponent moves to the complex domain. A base
    ///   equal to `e` uses the exponential function.
    /// - Complex values with a whole exponent use repeated squaring,
    ///   otherwise the principal value of `exp(w * ln(z))`.
    ///
    /// Zero raised to a negative power is a division by zero in every variant.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `word`: Word size integer results are wrapped to.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     options::IntWordSize,
    ///     value::core::Value,
    /// };
    ///
    /// let word = IntWordSize::Bits8;
    /// let result = Context::eval_pow(&Value::Int(2), &Value::Int(7), word).unwrap();
    /// assert_eq!(result, Value::Int(-128));
    ///
    /// let result = Context::eval_pow(&Value::Int(-1), &Value::Int(-3), word).unwrap();
    /// assert_eq!(result, Value::Int(-1));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, word: IntWordSize) -> EvalResult<Value> {
        if base.is_zero() && exponent.whole_number().is_some_and(|n| n < 0) {
            return Err(ParseErrorKind::DivisionByZero.into());
        }

        match base.promote(exponent, word) {
            Promoted::Int(b, e) => Ok(Value::Int(word.wrap_signed(pow_signed(b, e)))),
            Promoted::UInt(b, e) => Ok(Value::UInt(word.wrap_unsigned(wrapping_pow(b, e)))),
            Promoted::Real(b, e) => Ok(pow_real(b, &e)),
            Promoted::Complex(b, e) => Ok(Value::Complex(pow_complex(b, &e)?)),
        }
    }
}

fn pow_signed(base: i128, exponent: i128) -> i128 {
    if exponent >= 0 {
        return wrapping_pow(base.cast_unsigned(), exponent.cast_unsigned()).cast_signed();
    }
    match base {
        1 => 1,
        -1 if exponent % 2 == 0 => 1,
        -1 => -1,
        _ => 0,
    }
}

fn pow_real(base: Float, exponent: &Float) -> Value {
    if exponent.is_integer() {
        return Value::Real(base.pow(exponent));
    }
    if base.is_sign_negative() && !base.is_zero() {
        let z = Complex::with_val(FLOAT_PRECISION, (base, 0));
        let w = Complex::with_val(FLOAT_PRECISION, (exponent, 0));
        return Value::Complex(z.pow(&w));
    }
    if is_euler(&base) {
        return Value::Real(exponent.clone().exp());
    }
    Value::Real(base.pow(exponent))
}

fn pow_complex(base: Complex, exponent: &Complex) -> EvalResult<Complex> {
    if let Some(n) = whole_part(exponent) {
        return Ok(pow_integer(&base, &n)?);
    }
    if base.imag().is_zero() && is_euler(base.real()) {
        return Ok(exponent.clone().exp());
    }
    Ok(base.pow(exponent))
}

/// The exponent as an integer when repeated squaring stays short.
fn whole_part(z: &Complex) -> Option<Integer> {
    let re = z.real();
    let small = re.get_exp().is_none_or(|exp| exp <= WHOLE_NUMBER_BITS);
    if z.imag().is_zero() && re.is_integer() && small {
        re.to_integer()
    } else {
        None
    }
}
