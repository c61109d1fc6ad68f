use std::fmt::{self, Formatter, Write};

use rug::Float;

use crate::interpreter::{
    output::core::{Outputter, digit},
    value::core::FLOAT_DIGITS10,
};

/// Lowest decimal exponent still written in fixed notation.
const FIXED_MIN_EXPONENT: i32 = -4;

impl Outputter<'_> {
    /// Writes an unsigned integer in decimal, by repeated division by ten.
    pub(super) fn fmt_decimal_uint(f: &mut Formatter<'_>, mut value: u128) -> fmt::Result {
        let mut reversed = Vec::with_capacity(39);
        loop {
            reversed.push(digit((value % 10) as u32));
            value /= 10;
            if value == 0 {
                break;
            }
        }
        reversed.iter().rev().try_for_each(|&c| f.write_char(c))
    }

    /// Writes a real number in decimal with `precision` significant digits.
    ///
    /// The notation follows `printf("%g")`: scientific (`1.5e+20`) when the
    /// decimal exponent is below -4 or not below the precision, fixed
    /// otherwise, with trailing zeros of the fraction removed. Precision `0`
    /// and precisions above [`FLOAT_DIGITS10`] use [`FLOAT_DIGITS10`].
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::{
    ///     options::Config,
    ///     output::core::Outputter,
    ///     value::core::{FLOAT_PRECISION, Value},
    /// };
    /// use rug::Float;
    ///
    /// let config = Config { precision: 6,
    ///                       ..Config::default() };
    /// let render = |x: f64| Outputter::new(&Value::Real(Float::with_val(FLOAT_PRECISION, x)), &config).to_string();
    ///
    /// assert_eq!(render(2.5), "2.5");
    /// assert_eq!(render(1.0 / 3.0), "0.333333");
    /// assert_eq!(render(123_456_789.0), "1.23457e+08");
    /// assert_eq!(render(0.000_01), "1e-05");
    /// assert_eq!(render(-0.0), "-0");
    /// ```
    pub(super) fn fmt_decimal_float(&self, f: &mut Formatter<'_>, x: &Float) -> fmt::Result {
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_sign_negative() {
            f.write_char('-')?;
        }
        if x.is_infinite() {
            return f.write_str("inf");
        }
        if x.is_zero() {
            return f.write_char('0');
        }

        let precision = match self.precision {
            0 => FLOAT_DIGITS10,
            p => p.min(FLOAT_DIGITS10),
        };
        let (_, mantissa, exponent) = x.to_sign_string_exp(10, Some(precision as usize));
        let Some(exponent) = exponent else {
            return f.write_str(&mantissa);
        };
        let mantissa = mantissa.trim_end_matches('0');
        // Exponent of the leading digit.
        let exponent = exponent - 1;

        if exponent < FIXED_MIN_EXPONENT || i64::from(exponent) >= i64::from(precision) {
            let (lead, rest) = mantissa.split_at(1);
            f.write_str(lead)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            let sign = if exponent < 0 { '-' } else { '+' };
            return write!(f, "e{sign}{:02}", exponent.unsigned_abs());
        }

        if exponent < 0 {
            f.write_str("0.")?;
            for _ in 1..exponent.unsigned_abs() {
                f.write_char('0')?;
            }
            return f.write_str(mantissa);
        }

        let integer_digits = exponent.unsigned_abs() as usize + 1;
        if mantissa.len() <= integer_digits {
            f.write_str(mantissa)?;
            for _ in mantissa.len()..integer_digits {
                f.write_char('0')?;
            }
            Ok(())
        } else {
            let (integer, fraction) = mantissa.split_at(integer_digits);
            write!(f, "{integer}.{fraction}")
        }
    }
}
